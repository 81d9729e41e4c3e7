// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: database path
fn db_path_arg() -> Arg {
    Arg::new("db_path")
        .short('d')
        .long("db-path")
        .value_name("PATH")
        .default_value("pantry.db")
        .help("Database path")
}

fn build_cli() -> Command {
    Command::new("pantry")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Pantry Contributors")
        .about("Ingredient catalogue with paginated listing and form validation")
        .subcommand_required(false)
        .subcommand(
            Command::new("init")
                .about("Create the database and apply migrations")
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("serve")
                .about("Run the HTTP server")
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .value_name("FILE")
                        .help("TOML configuration file"),
                )
                .arg(
                    Arg::new("bind")
                        .short('b')
                        .long("bind")
                        .value_name("ADDR")
                        .help("Address to listen on"),
                )
                .arg(
                    Arg::new("db_path")
                        .short('d')
                        .long("db-path")
                        .value_name("PATH")
                        .help("Database path"),
                ),
        )
        .subcommand(
            Command::new("seed")
                .about("Insert randomly generated demo ingredients")
                .arg(
                    Arg::new("count")
                        .short('n')
                        .long("count")
                        .default_value("10")
                        .help("Number of ingredients to insert"),
                )
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("list")
                .about("Print one page of ingredients")
                .arg(
                    Arg::new("page")
                        .short('p')
                        .long("page")
                        .default_value("1")
                        .help("Page number, starting at 1"),
                )
                .arg(db_path_arg()),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("pantry.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
