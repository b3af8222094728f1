pub mod assessment;
pub mod indicator;
pub mod prediction;
pub mod survey;
