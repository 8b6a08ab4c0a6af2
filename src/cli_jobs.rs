use anyhow::Result;
use std::sync::Arc;

use crate::client::{ClientConfig, CredentialStore, JobBoardClient, StoredCredentials};
use crate::shared::models::{CreateJobRequest, JobResponse};

fn build_client() -> Result<JobBoardClient> {
    let store = CredentialStore::default_location()?;
    let config = match store.load()? {
        Some(auth) => ClientConfig::new(&auth.server),
        None => ClientConfig::from_env(),
    };

    Ok(JobBoardClient::new(
        config,
        Arc::new(StoredCredentials::new(store)),
    )?)
}

pub async fn list() -> Result<()> {
    let client = build_client()?;
    let jobs = client.list_jobs().await?;

    if jobs.is_empty() {
        println!("No jobs posted yet.");
        return Ok(());
    }

    for job in &jobs {
        let remote = if job.remote { " · remote" } else { "" };
        println!(
            "{}  {} — {} ({}{})",
            job.id, job.title, job.company, job.location, remote
        );
    }
    println!();
    println!(
        "{} job(s). Use 'jobboard jobs show <id>' for details.",
        jobs.len()
    );

    Ok(())
}

pub async fn show(id: &str) -> Result<()> {
    let client = build_client()?;
    let job = client.get_job(id).await?;
    print_job(&job);
    Ok(())
}

pub async fn post(request: CreateJobRequest) -> Result<()> {
    let client = build_client()?;
    let job = client.create_job(&request).await?;

    println!("✓ Job '{}' posted (id: {})", job.title, job.id);
    Ok(())
}

fn print_job(job: &JobResponse) {
    println!("{}", job.title);
    println!("  Company:    {}", job.company);
    println!("  Location:   {}", job.location);
    println!("  Salary:     {}", job.salary);
    println!("  Type:       {}", job.employment_type);
    println!("  Remote:     {}", if job.remote { "yes" } else { "no" });
    if !job.requirements.is_empty() {
        println!("  Requires:   {}", job.requirements.join(", "));
    }
    println!("  Posted:     {}", job.created_at);
    println!();
    println!("{}", job.description);
}
