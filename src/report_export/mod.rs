/// Report export core - Domain model and extraction services
///
/// This module holds the pure logic of the exporters: the shape of the
/// upstream report rows, the records derived from them and the rules for
/// deriving them. It performs no I/O.
pub mod domain;
pub mod services;
