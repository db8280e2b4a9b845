//! Print an argon2 hash for seeding the `users` table, e.g.
//! `cargo run -p server --features server --bin hash-password -- 'secret'`.

fn main() -> Result<(), shared_types::AppError> {
    let Some(password) = std::env::args().nth(1) else {
        eprintln!("usage: hash-password <password>");
        std::process::exit(2);
    };
    println!("{}", server::auth::password::hash_password(&password)?);
    Ok(())
}
