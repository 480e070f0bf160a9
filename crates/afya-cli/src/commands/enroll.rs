//! Enroll command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use uuid::Uuid;

use afya_core::model::NewEnrollment;
use afya_rest::resources::Enrollments;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct EnrollArgs {
    /// Client identifier
    #[arg(long)]
    pub client: Uuid,

    /// Program identifier
    #[arg(long)]
    pub program: Uuid,
}

pub async fn run(args: EnrollArgs, server: Option<&str>) -> Result<()> {
    let client = session::rest_client(server)?;
    session::require_signed_in(&client)?;

    let new = NewEnrollment {
        client: args.client,
        program: args.program,
    };

    eprintln!("{}", "Enrolling client...".dimmed());

    let enrollment = Enrollments::new(client)
        .create(&new)
        .await
        .context("Failed to enroll client")?;

    output::success("Client enrolled");
    println!();
    output::field("Enrollment", &enrollment.uuid.to_string());
    output::field("Status", &enrollment.status);

    Ok(())
}
