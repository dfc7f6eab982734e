pub mod cardiorespiratory;
pub mod constitutional;
pub mod dermatological;
pub mod ent;
pub mod environmental;
pub mod eye;
pub mod gastrointestinal;
pub mod genitourinary;
pub mod gynecological;
pub mod miscellaneous;
pub mod musculoskeletal;
pub mod neurological;
