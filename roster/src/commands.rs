//! Subcommands and the code that drives the controller for each of them.

use std::collections::BTreeSet;
use std::io::Write;

use clap::Subcommand;
use roster_client::{ActiveDialog, Notice, RosterState};
use roster_store::{RecordId, RecordStore, StudentRecord};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List students, optionally filtered by name or student id.
    List {
        /// Case-insensitive text matched against name and student id.
        #[arg(short, long, default_value = "")]
        query: String,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Show specific students by id. Unknown ids are skipped.
    Show {
        #[arg(required = true)]
        ids: Vec<RecordId>,
    },
    /// Add a student with a zero average grade.
    Add {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        student_id: String,
    },
    /// Replace a student's fields. Omitted fields keep their current value.
    Edit {
        id: RecordId,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        student_id: Option<String>,
        #[arg(short, long)]
        grade: Option<f64>,
    },
    /// Delete the given students.
    Delete {
        #[arg(required = true)]
        ids: Vec<RecordId>,
        /// Confirm the deletion. Without it the command only lists the selection.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Error type for CLI operations.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("no student with id {0}")]
    UnknownRecord(RecordId),
}

pub async fn run<S, W>(state: &mut RosterState<S>, command: Command, out: &mut W) -> anyhow::Result<()>
where
    S: RecordStore,
    W: Write,
{
    match command {
        Command::List { query, json } => {
            state.set_query(query);
            let visible = state.visible_records();
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&visible)?)?;
            } else {
                write_table(out, &visible)?;
            }
        }
        Command::Show { ids } => {
            let ids: BTreeSet<RecordId> = ids.into_iter().collect();
            let found = state.store().get_by_ids(&ids).await?;
            let found: Vec<&StudentRecord> = found.iter().collect();
            write_table(out, &found)?;
        }
        Command::Add { name, student_id } => {
            state.request_add();
            state.confirm_add(name, student_id).await?;
            write_notice(out, state.notice())?;
        }
        Command::Edit {
            id,
            name,
            student_id,
            grade,
        } => {
            let current = state
                .all_records()
                .iter()
                .find(|r| r.id == id)
                .cloned()
                .ok_or(CliError::UnknownRecord(id))?;

            let name = name.or_else(|| current.full_name.clone());
            let student_id = student_id.or_else(|| current.student_id.clone());
            let grade = grade.unwrap_or(current.average_grade);

            state.request_edit(current);
            state.confirm_edit(id, name, student_id, grade).await?;
            write_notice(out, state.notice())?;
        }
        Command::Delete { ids, yes } => {
            let wanted: BTreeSet<RecordId> = ids.into_iter().collect();
            let picked: Vec<StudentRecord> = state
                .all_records()
                .iter()
                .filter(|r| wanted.contains(&r.id))
                .cloned()
                .collect();
            for id in &wanted {
                if !picked.iter().any(|r| r.id == *id) {
                    tracing::warn!(id, "Skipping unknown id");
                    writeln!(out, "Skipping unknown id {}", id)?;
                }
            }

            state.clear_selection();
            for record in &picked {
                state.toggle_select(record);
            }
            state.request_delete();

            if *state.active_dialog() != ActiveDialog::ConfirmDelete {
                write_notice(out, state.notice())?;
                return Ok(());
            }

            if yes {
                state.confirm_delete().await?;
                write_notice(out, state.notice())?;
            } else {
                let selected: Vec<&StudentRecord> = state.selected().iter().collect();
                write_table(out, &selected)?;
                writeln!(out, "Pass --yes to delete these students")?;
                state.cancel_dialog();
            }
        }
    }
    Ok(())
}

fn write_table<W: Write>(out: &mut W, records: &[&StudentRecord]) -> std::io::Result<()> {
    writeln!(out, "{:>5}  {:<28}  {:<12}  {:>6}", "ID", "NAME", "STUDENT ID", "GRADE")?;
    for r in records {
        writeln!(
            out,
            "{:>5}  {:<28}  {:<12}  {:>6.2}",
            r.id,
            r.full_name_or_empty(),
            r.student_id_or_empty(),
            r.average_grade
        )?;
    }
    Ok(())
}

fn write_notice<W: Write>(out: &mut W, notice: Option<&Notice>) -> std::io::Result<()> {
    if let Some(notice) = notice {
        writeln!(out, "{}", notice)?;
    }
    Ok(())
}
