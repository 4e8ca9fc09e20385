//! Operator-facing console output.
//!
//! Diagnostics go through `tracing`; this is the report the operator copies
//! ids from, so it is written to plain stdout.

use std::fmt::Display;
use std::io::{self, Write};

use uuid::Uuid;

use crate::db::SeedOutcome;
use crate::fixtures::SAMPLE_PASSWORD;

const RULE: &str = "==================================================";

/// Writes seeding progress and the closing summary to `W`.
pub struct ConsoleReport<W> {
    out: W,
}

impl ConsoleReport<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "Sample User Creation Script for Cookpad App")?;
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out)
    }

    pub fn creating_users(&mut self) -> io::Result<()> {
        writeln!(self.out, "Creating users in Supabase Auth...")?;
        writeln!(self.out, "{RULE}")
    }

    pub fn user_created(&mut self, email: &str, id: Uuid) -> io::Result<()> {
        writeln!(self.out, "✓ Created: {email} -> {id}")
    }

    pub fn user_failed(&mut self, email: &str, error: &dyn Display) -> io::Result<()> {
        writeln!(self.out, "✗ Error creating {email}: {error}")
    }

    pub fn profile_created(&mut self, username: &str) -> io::Result<()> {
        writeln!(self.out, "  ✓ Created profile for {username}")
    }

    pub fn profile_failed(
        &mut self,
        username: &str,
        email: &str,
        error: &dyn Display,
    ) -> io::Result<()> {
        writeln!(
            self.out,
            "  ✗ Error creating profile for {username} ({email}): {error}"
        )
    }

    /// Prints the created count and every email with its generated id.
    pub fn summary(&mut self, outcome: &SeedOutcome) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out, "Successfully created {} users", outcome.len())?;
        writeln!(self.out)?;
        writeln!(self.out, "User IDs:")?;
        for user in &outcome.created {
            writeln!(self.out, "  {}: {}", user.email, user.id)?;
        }
        Ok(())
    }

    /// Follow-up instructions for the SQL import, which this tool does not run.
    pub fn next_steps(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out, "Next Steps:")?;
        writeln!(
            self.out,
            "1. Run the sample_data_import.sql file in Supabase SQL Editor"
        )?;
        writeln!(
            self.out,
            "2. Replace the placeholder UUIDs with the actual user IDs shown above"
        )?;
        writeln!(
            self.out,
            "3. Or use the user_ids dictionary to update the SQL file programmatically"
        )?;
        writeln!(self.out)?;
        writeln!(self.out, "All users have the password: {SAMPLE_PASSWORD}")?;
        self.out.flush()
    }
}
