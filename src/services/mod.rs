pub mod consumption;
pub mod monthly_model;
pub mod pvgis;
