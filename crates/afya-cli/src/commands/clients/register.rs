//! Register client command implementation.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use colored::Colorize;

use afya_core::model::NewClient;
use afya_rest::resources::Clients;

use crate::output;
use crate::session;
use crate::validate;

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// First name
    #[arg(long)]
    pub first_name: String,

    /// Last name
    #[arg(long)]
    pub last_name: String,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    pub dob: NaiveDate,

    /// Contact phone number
    #[arg(long)]
    pub phone_number: String,

    /// County of residence
    #[arg(long)]
    pub county: String,

    /// Sub-county of residence
    #[arg(long)]
    pub sub_county: String,

    /// Gender
    #[arg(long)]
    pub gender: String,
}

pub async fn run(args: RegisterArgs, server: Option<&str>) -> Result<()> {
    validate::not_blank("first_name", &args.first_name)?;
    validate::not_blank("last_name", &args.last_name)?;
    validate::not_blank("phone_number", &args.phone_number)?;
    validate::not_blank("county", &args.county)?;
    validate::not_blank("sub_county", &args.sub_county)?;
    validate::not_blank("gender", &args.gender)?;

    let client = session::rest_client(server)?;
    session::require_signed_in(&client)?;

    let new = NewClient {
        first_name: args.first_name,
        last_name: args.last_name,
        dob: args.dob,
        phone_number: args.phone_number,
        county: args.county,
        sub_county: args.sub_county,
        gender: args.gender,
    };

    eprintln!("{}", "Registering client...".dimmed());

    let created = Clients::new(client)
        .create(&new)
        .await
        .context("Failed to register client")?;

    output::success("Client registered");
    println!();
    output::field("UUID", &created.uuid.to_string());
    output::field("Name", &created.full_name());

    Ok(())
}
