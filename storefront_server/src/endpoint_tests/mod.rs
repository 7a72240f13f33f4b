mod helpers;
mod mocks;

mod features;
mod orders;
