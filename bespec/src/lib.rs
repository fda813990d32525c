pub mod checker;
pub mod error;
pub mod manager;
pub mod matcher;
pub mod presenter;
pub mod value;

pub use checker::{Checker, Checkers};
pub use error::{Error, Failure, Result};
pub use manager::MatcherManager;
pub use matcher::{Matcher, ScalarMatcher};
pub use presenter::{Presenter, StringPresenter, TaggedPresenter};
pub use value::{Key, Object, Value};
