// Page sections shared by the Home and Contact routes

mod call_to_action;
mod contact_form;
mod contact_hero;
mod contact_info;
mod footer;
mod header;
mod hero;
mod how_it_works;
mod nav;
mod solutions;
mod testimonials;

pub use call_to_action::CallToAction;
pub use contact_form::ContactForm;
pub use contact_hero::ContactHero;
pub use contact_info::ContactInfo;
pub use footer::Footer;
pub use header::SectionHeader;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use nav::Nav;
pub use solutions::Solutions;
pub use testimonials::Testimonials;
