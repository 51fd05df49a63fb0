//! Presentation-agnostic state for the marketing site: the contact form
//! submission lifecycle, the testimonial carousel, the floating navbar and
//! scroll-reveal bookkeeping.

pub mod carousel;
pub mod contact_form;
pub mod deferred;
pub mod navbar;
pub mod sender;
pub mod visibility;

pub use carousel::{CarouselRotation, TestimonialCarousel};
pub use contact_form::{
    ContactFormController, FormSnapshot, SubmissionStatus, SubmitOutcome, SUCCESS_DISPLAY_WINDOW,
};
pub use deferred::DeferredTask;
pub use navbar::NavbarState;
pub use sender::{ContactSender, HttpContactSender, SendError, SimulatedSender};
pub use visibility::{BroadcastViewportObserver, SectionVisibility, ViewportObserver};
