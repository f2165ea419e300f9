use crate::{
    cli::shell,
    config::{self, Config},
    logging,
    prelude::{
        AppError,
        command::{Cli, Commands},
    },
    view::render_contacts,
};
use clap::Parser;
use log::info;
use std::io;

pub fn run_app() -> Result<(), AppError> {
    config::load_env();
    let cli = Cli::parse();

    let config = Config::from_parts(&cli.storage_choice, &cli.data_dir, &cli.log_level)?;
    logging::init_logging(&config.log_level)?;

    let mut store = config.open_store()?;
    info!(
        "storage choice is {} at {}",
        config.storage.is_which(),
        config.data_dir.display()
    );

    match cli.command {
        Commands::Add { name, phone } => {
            store.create(&name, &phone)?;

            println!("Contact added successfully");
            print!("{}", render_contacts(store.contacts(), None));
            Ok(())
        }

        Commands::List => {
            print!("{}", render_contacts(store.contacts(), None));
            Ok(())
        }

        Commands::Edit { id, name, phone } => {
            store.update(id, &name, &phone)?;

            println!("Contact updated successfully");
            print!("{}", render_contacts(store.contacts(), None));
            Ok(())
        }

        Commands::Delete { id } => {
            let existed = store.get(id).is_some();
            store.delete(id)?;

            if existed {
                println!("Contact deleted successfully");
            } else {
                println!("No contact with id {id}, nothing deleted");
            }
            print!("{}", render_contacts(store.contacts(), None));
            Ok(())
        }

        Commands::Clear => {
            store.clear_all()?;

            println!("All contacts cleared");
            print!("{}", render_contacts(store.contacts(), None));
            Ok(())
        }

        Commands::Shell => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            shell::run_session(&mut store, &mut stdin.lock(), &mut stdout.lock())
        }
    }
}
