use std::io::{self, BufRead, Write};

use anyhow::{Context, bail};
use playbook_core::AssessmentError;
use services::{PlaybookServices, QuizReport, QuizService, QuizView};

/// Answers every question from `answers` (1-based option numbers) and prints the report.
pub fn execute_scripted(
    services: &mut PlaybookServices,
    answers: &[usize],
    json: bool,
) -> anyhow::Result<()> {
    let quiz = services.quiz_mut();
    let total = quiz.engine().questions().len();
    if answers.len() != total {
        bail!("expected {total} answers, got {}", answers.len());
    }

    for (i, &number) in answers.iter().enumerate() {
        let Some(option) = number.checked_sub(1) else {
            bail!("answer {}: option numbers start at 1", i + 1);
        };
        quiz.select_answer(option)
            .with_context(|| format!("answer {}", i + 1))?;
        quiz.advance()?;
    }

    let mut out = io::stdout().lock();
    print_report(&mut out, &quiz.report()?, json)
}

/// Runs the quiz as a prompt loop on stdin.
pub fn execute_interactive(services: &mut PlaybookServices, json: bool) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    run_interactive(services.quiz_mut(), &mut input, &mut out, json)
}

fn run_interactive(
    quiz: &mut QuizService,
    input: &mut impl BufRead,
    out: &mut impl Write,
    json: bool,
) -> anyhow::Result<()> {
    writeln!(out, "Knowledge Check")?;
    writeln!(
        out,
        "Type an option number to select it, 'n' for next, 'p' for previous, 'r' to restart, 'q' to quit."
    )?;

    loop {
        while !quiz.is_completed() {
            render_question(out, &quiz.view())?;
            let Some(line) = read_command(input, out)? else {
                writeln!(out, "Quiz not finished.")?;
                return Ok(());
            };

            let outcome = match line.as_str() {
                "q" | "quit" => {
                    writeln!(out, "Quiz not finished.")?;
                    return Ok(());
                }
                "n" | "next" | "" => quiz.advance().map(|_| ()),
                "p" | "prev" | "previous" => quiz.retreat().map(|_| ()),
                "r" | "restart" => {
                    quiz.reset();
                    Ok(())
                }
                other => match other.parse::<usize>() {
                    Ok(number) if number >= 1 => quiz.select_answer(number - 1),
                    _ => {
                        writeln!(out, "Unrecognized input {other:?}.")?;
                        continue;
                    }
                },
            };

            if let Err(err) = outcome {
                writeln!(out, "{}", hint(err.assessment()))?;
            }
        }

        print_report(out, &quiz.report()?, json)?;

        write!(out, "Retake the quiz? [y/N] ")?;
        out.flush()?;
        match read_command(input, out)?.as_deref() {
            Some("y" | "yes") => quiz.reset(),
            _ => return Ok(()),
        }
    }
}

fn read_command(input: &mut impl BufRead, out: &mut impl Write) -> anyhow::Result<Option<String>> {
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

fn hint(err: &AssessmentError) -> String {
    match err {
        AssessmentError::AnswerRequired { .. } => "Select an answer first.".to_string(),
        AssessmentError::AtBoundary => "Already at the first question.".to_string(),
        AssessmentError::InvalidSelection { available, .. } => {
            format!("Choose an option between 1 and {available}.")
        }
        other => other.to_string(),
    }
}

fn render_question(out: &mut impl Write, view: &QuizView) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Question {} of {}", view.number, view.total)?;
    writeln!(out, "{}", view.prompt)?;
    for option in &view.options {
        let mark = if option.selected { "(*)" } else { "( )" };
        writeln!(out, "  {mark} {}. {}", option.index + 1, option.text)?;
    }
    let next = if view.is_last { "finish" } else { "next" };
    if view.can_advance {
        write!(out, "[n: {next}] ")?;
    }
    if view.can_retreat {
        write!(out, "[p: previous] ")?;
    }
    write!(out, "> ")
}

fn print_report(out: &mut impl Write, report: &QuizReport, json: bool) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
        return Ok(());
    }

    let results = &report.results;
    writeln!(out)?;
    writeln!(
        out,
        "Quiz Results: {}/{} ({})",
        results.score(),
        results.total(),
        results.band()
    )?;
    for outcome in results.outcomes() {
        let mark = if outcome.is_correct { "✓" } else { "✗" };
        writeln!(out, "{mark} {}. {}", outcome.index + 1, outcome.prompt)?;
        writeln!(
            out,
            "    Your answer: {}",
            outcome.chosen_text.as_deref().unwrap_or("(none)")
        )?;
        if let Some(correct) = outcome.correction() {
            writeln!(out, "    Correct answer: {correct}")?;
        }
        if let Some(explanation) = &outcome.explanation {
            writeln!(out, "    {explanation}")?;
        }
    }
    Ok(())
}
