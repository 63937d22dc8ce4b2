//! Page components.

mod api_page;
mod boonjang;
mod jogi;
mod law;
mod yusa;

pub use api_page::ApiPage;
pub use boonjang::BoonjangPage;
pub use jogi::JogiPage;
pub use law::LawPage;
pub use yusa::YusaPage;
