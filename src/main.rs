use quill::{config::Config, linkcheck::LinkPolicy};

/// Prints the resolved runtime configuration, for checking a deployment
/// environment without starting the server.
fn main() {
    let config = Config::from_env().expect("Failed to load configuration");
    let policy = LinkPolicy::default();

    println!("bind address:  {}", config.bind_addr());
    println!("database url:  {}", config.database_url());
    println!("public dir:    {}", config.public_dir());
    println!(
        "link policy:   {} blacklist terms, {} keywords",
        policy.blacklist().len(),
        policy.keywords().len()
    );
}
