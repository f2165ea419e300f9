use super::{confirm_action, get_input, get_input_to_lower, prompt};
use crate::domain::ContactStore;
use crate::errors::AppError;
use crate::view::Presenter;
use std::io::{BufRead, Write};
use uuid::Uuid;

const GO_BACK: &str = "*";

enum MenuChoice {
    Add,
    Edit,
    Delete,
    Clear,
    Exit,
}

fn parse_menu_choice(action: &str) -> Result<MenuChoice, AppError> {
    match action {
        "1" => Ok(MenuChoice::Add),
        "2" => Ok(MenuChoice::Edit),
        "3" => Ok(MenuChoice::Delete),
        "4" => Ok(MenuChoice::Clear),
        "5" => Ok(MenuChoice::Exit),
        _ => Err(AppError::ParseCommand(action.to_string())),
    }
}

fn show_menu<W: Write>(output: &mut W) -> Result<(), AppError> {
    writeln!(output)?;
    writeln!(output, "1. Add contact")?;
    writeln!(output, "2. Edit contact")?;
    writeln!(output, "3. Delete contact")?;
    writeln!(output, "4. Clear all contacts")?;
    writeln!(output, "5. Exit")?;
    write!(output, "> ")?;
    output.flush()?;
    Ok(())
}

/// Runs the menu loop until the user exits or the input ends.
///
/// The list and the status line are re-rendered before every menu.
pub fn run_session<R: BufRead, W: Write>(
    store: &mut ContactStore,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    let mut presenter = Presenter::new(store);

    writeln!(output, "\n--- Contact BOOK ---\n")?;

    loop {
        write!(output, "{}", presenter.render())?;
        show_menu(output)?;

        let Some(action) = get_input(input)? else {
            break;
        };

        let choice = match parse_menu_choice(&action) {
            Ok(choice) => choice,
            Err(e) => {
                presenter.report(&e);
                continue;
            }
        };

        let keep_going = match choice {
            MenuChoice::Add => add_contact(&mut presenter, input, output)?,
            MenuChoice::Edit => edit_contact(&mut presenter, input, output)?,
            MenuChoice::Delete => delete_contact(&mut presenter, input, output)?,
            MenuChoice::Clear => clear_contacts(&mut presenter, input, output)?,
            MenuChoice::Exit => false,
        };

        if !keep_going {
            break;
        }
    }

    writeln!(output, "\nBye!")?;
    Ok(())
}

// Each step returns Ok(false) once the input is exhausted.

fn add_contact<R: BufRead, W: Write>(
    presenter: &mut Presenter<'_>,
    input: &mut R,
    output: &mut W,
) -> Result<bool, AppError> {
    prompt(output, "Enter contact name")?;
    let Some(name) = get_input(input)? else {
        return Ok(false);
    };

    prompt(output, "Enter contact phone")?;
    let Some(phone) = get_input(input)? else {
        return Ok(false);
    };

    if presenter.submit(&name, &phone).is_some() {
        writeln!(output, "Contact added successfully!")?;
    }
    Ok(true)
}

fn edit_contact<R: BufRead, W: Write>(
    presenter: &mut Presenter<'_>,
    input: &mut R,
    output: &mut W,
) -> Result<bool, AppError> {
    let id = match select_contact(presenter, input, output, "edit")? {
        Selection::Picked(id) => id,
        Selection::Back => return Ok(true),
        Selection::Ended => return Ok(false),
    };

    if !presenter.begin_edit(id) {
        return Ok(true);
    }

    // Stay in edit mode until the save succeeds or the user backs out.
    loop {
        write!(output, "{}", presenter.render())?;

        prompt(output, &format!("Enter new name, or {GO_BACK} to go back"))?;
        let Some(name) = get_input(input)? else {
            presenter.cancel_edit();
            return Ok(false);
        };
        if name == GO_BACK {
            presenter.cancel_edit();
            return Ok(true);
        }

        prompt(output, "Enter new phone")?;
        let Some(phone) = get_input(input)? else {
            presenter.cancel_edit();
            return Ok(false);
        };

        if presenter.save_edit(&name, &phone).is_some() {
            writeln!(output, "Contact updated successfully!")?;
            return Ok(true);
        }
    }
}

fn delete_contact<R: BufRead, W: Write>(
    presenter: &mut Presenter<'_>,
    input: &mut R,
    output: &mut W,
) -> Result<bool, AppError> {
    let id = match select_contact(presenter, input, output, "delete")? {
        Selection::Picked(id) => id,
        Selection::Back => return Ok(true),
        Selection::Ended => return Ok(false),
    };

    if presenter.delete(id) {
        writeln!(output, "Contact deleted successfully!")?;
    }
    Ok(true)
}

fn clear_contacts<R: BufRead, W: Write>(
    presenter: &mut Presenter<'_>,
    input: &mut R,
    output: &mut W,
) -> Result<bool, AppError> {
    confirm_action(output, "delete all contacts")?;

    let Some(consent) = get_input_to_lower(input)? else {
        return Ok(false);
    };

    if consent == "y" && presenter.clear_all() {
        writeln!(output, "All contacts cleared!")?;
    }
    Ok(true)
}

enum Selection {
    Picked(Uuid),
    Back,
    Ended,
}

/// Asks for a 1-based list position and resolves it to a contact id.
/// Bad input is reported on the status line and counts as going back.
fn select_contact<R: BufRead, W: Write>(
    presenter: &mut Presenter<'_>,
    input: &mut R,
    output: &mut W,
    action: &str,
) -> Result<Selection, AppError> {
    prompt(
        output,
        &format!("Enter the number of the contact to {action}, or {GO_BACK} to go back"),
    )?;

    let Some(selection) = get_input(input)? else {
        return Ok(Selection::Ended);
    };

    if selection == GO_BACK {
        return Ok(Selection::Back);
    }

    match resolve_position(presenter, &selection) {
        Ok(id) => Ok(Selection::Picked(id)),
        Err(e) => {
            presenter.report(&e);
            Ok(Selection::Back)
        }
    }
}

fn resolve_position(presenter: &Presenter<'_>, selection: &str) -> Result<Uuid, AppError> {
    let position: usize = selection.parse()?;

    position
        .checked_sub(1)
        .and_then(|index| presenter.contacts().get(index))
        .map(|contact| contact.id())
        .ok_or_else(|| AppError::NotFound(format!("Contact #{position}")))
}
