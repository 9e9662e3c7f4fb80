pub use super::pearl::Entity as Pearl;
