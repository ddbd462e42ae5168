pub mod downloads;
pub mod glossary;
pub mod outline;
pub mod quiz;
pub mod track;
pub mod validate;
