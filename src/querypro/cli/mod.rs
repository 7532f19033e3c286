//! # CLI Layer
//!
//! One front end for querypro. It is the only place that writes to the terminal
//! or decides exit codes.
//!
//! `serve` runs the HTTP service in-process. Every other command talks to a running
//! service through the same [`Dashboard`] a graphical front end would drive, so the
//! notifications printed here are the ones a browser user would see.

mod print;

use querypro::client::EnquiryClient;
use querypro::commands::parse_id;
use querypro::config::QueryProConfig;
use querypro::dashboard::Dashboard;
use querypro::error::Result;
use querypro::model::EnquiryFields;
use querypro::server;
use std::path::PathBuf;

pub struct SubmitForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

fn dashboard(config: &QueryProConfig) -> Result<Dashboard<EnquiryClient>> {
    Ok(Dashboard::new(EnquiryClient::from_config(config)?))
}

fn flush(dash: &Dashboard<EnquiryClient>) {
    print::print_messages(&dash.take_notifications());
}

pub async fn handle_serve(
    mut config: QueryProConfig,
    bind: Option<String>,
    data_dir: Option<PathBuf>,
) -> Result<bool> {
    if let Some(bind) = bind {
        config.bind = bind;
    }
    if let Some(dir) = data_dir {
        config.data_dir = dir;
    }
    server::serve(&config).await?;
    Ok(true)
}

pub async fn handle_list(config: &QueryProConfig, search: Option<String>) -> Result<bool> {
    let dash = dashboard(config)?;
    dash.load().await?;
    if let Some(term) = search {
        dash.set_search(term);
    }

    let visible = dash.visible();
    print::print_enquiries(&visible);
    print::print_summary(visible.len(), dash.enquiries().len());
    Ok(true)
}

pub async fn handle_submit(
    config: &QueryProConfig,
    form: SubmitForm,
    id: Option<String>,
) -> Result<bool> {
    let dash = dashboard(config)?;

    let mut fields = EnquiryFields::default();
    if let Some(raw) = id {
        let id = parse_id(&raw)?;
        if !dash.edit(id).await {
            flush(&dash);
            return Ok(false);
        }
        fields = dash.form();
    }
    // Flags override whatever the stored record held.
    fields.name = form.name.or(fields.name);
    fields.email = form.email.or(fields.email);
    fields.phone = form.phone.or(fields.phone);
    fields.message = form.message.or(fields.message);
    dash.set_form(fields);

    let ok = dash.submit().await;
    flush(&dash);
    Ok(ok)
}

pub async fn handle_show(config: &QueryProConfig, id: &str) -> Result<bool> {
    let id = parse_id(id)?;
    let client = EnquiryClient::from_config(config)?;
    let found = client.fetch_enquiry_by_id(id).await?;
    print::print_enquiry(&found.enquiry);
    Ok(true)
}

pub async fn handle_delete(config: &QueryProConfig, id: &str) -> Result<bool> {
    let id = parse_id(id)?;
    let dash = dashboard(config)?;
    let ok = dash.delete(id).await;
    flush(&dash);
    Ok(ok)
}
