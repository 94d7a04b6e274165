use serde::{Deserialize, Serialize};

pub mod contact;
pub mod journey;
pub mod nav;
pub mod projects;
pub mod system;
pub mod testimonials;
pub mod theme;

use contact::ContactMsg;
use journey::JourneyMsg;
use nav::NavMsg;
use projects::ProjectsMsg;
use system::SystemMsg;
use testimonials::TestimonialsMsg;
use theme::ThemeMsg;

/// Domain messages representing application intent
/// These are processed by the update function and delegated to the owning state slice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    System(SystemMsg),
    Nav(NavMsg),
    Theme(ThemeMsg),
    Projects(ProjectsMsg),
    Journey(JourneyMsg),
    Testimonials(TestimonialsMsg),
    Contact(ContactMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(msg) => msg.is_frequent(),
            Msg::Contact(msg) => msg.is_frequent(),
            _ => false,
        }
    }
}
