pub mod asrs;
pub mod diva;
pub mod diva_bank;
pub mod gad7;
pub mod phq9;
