#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_token_tests;

#[cfg(test)]
mod holiday_create_tests;

#[cfg(test)]
mod holiday_list_tests;

#[cfg(test)]
mod holiday_update_tests;

#[cfg(test)]
mod holiday_delete_tests;

#[cfg(test)]
mod holiday_isolation_tests;
