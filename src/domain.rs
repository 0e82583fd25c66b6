mod customer;

pub use customer::{Customer, UnknownCustomer};
