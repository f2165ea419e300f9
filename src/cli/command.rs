use crate::config::{DEFAULT_DATA_DIR, DEFAULT_LOG_LEVEL, DEFAULT_STORAGE_CHOICE};
use clap::{Parser, Subcommand};
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Simple Contact Book")]
pub struct Cli {
    /// Storage choice (mem, file) are available
    #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from(DEFAULT_STORAGE_CHOICE))]
    pub storage_choice: String,

    /// Directory holding the saved contact list
    #[arg(long, env = "CONTACTS_DIR", default_value_t = String::from(DEFAULT_DATA_DIR))]
    pub data_dir: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "CONTACTS_LOG", default_value_t = String::from(DEFAULT_LOG_LEVEL))]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,
    },
    /// List contacts in the order they were added
    List,
    /// Replace name and phone of an existing contact
    Edit {
        /// Id of the contact, as shown by `list`
        #[arg(long)]
        id: Uuid,

        /// New name
        #[arg(long)]
        name: String,

        /// New phone number
        #[arg(long)]
        phone: String,
    },
    /// Delete a contact by id
    Delete {
        /// Id of the contact, as shown by `list`
        #[arg(long)]
        id: Uuid,
    },
    /// Delete every contact
    Clear,
    /// Interactive session with a menu
    Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_edit_with_id() {
        let id = Uuid::new_v4();
        let cli = Cli::try_parse_from([
            "contact-book",
            "--storage-choice",
            "mem",
            "edit",
            "--id",
            &id.to_string(),
            "--name",
            "Ana B",
            "--phone",
            "999",
        ])
        .unwrap();

        assert_eq!(cli.storage_choice, "mem");
        match cli.command {
            Commands::Edit { id: parsed, name, phone } => {
                assert_eq!(parsed, id);
                assert_eq!(name, "Ana B");
                assert_eq!(phone, "999");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_id() {
        let result = Cli::try_parse_from(["contact-book", "delete", "--id", "not-an-id"]);

        assert!(result.is_err());
    }
}
