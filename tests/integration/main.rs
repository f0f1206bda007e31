//! Integration tests for the document services.

mod helpers;

mod mutation_test;
mod transfer_test;
