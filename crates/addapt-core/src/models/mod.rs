pub mod answers;
pub mod assessment;
pub mod diva;
pub mod history;
pub mod personal;

pub use answers::{AsrsAnswers, Gad7Answers, Phq9Answers};
pub use assessment::Assessment;
pub use diva::{CriterionB, CriterionC, DivaAnswers, DivaSupplement, ImpairmentArea, SymptomResponse};
pub use history::{FamilyHistory, MentalHealthHistory, SubstanceUse, UseLevel};
pub use personal::PersonalInformation;
