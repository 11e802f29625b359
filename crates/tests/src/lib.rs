#[cfg(test)]
mod common;

#[cfg(test)]
mod client_tests;

#[cfg(test)]
mod fallback_tests;


#[cfg(test)]
mod guard_tests;
