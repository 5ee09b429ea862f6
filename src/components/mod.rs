//! UI Components for the APOD gallery.

mod card;
mod fact;
mod gallery;
mod modal;

pub use card::ApodCard;
pub use fact::DidYouKnow;
pub use gallery::Gallery;
pub use modal::DetailModal;
