use syncstudy_shell::{AppShell, ShellConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    syncstudy_observability::init();

    let config = ShellConfig::from_env();
    let shell = AppShell::boot(&config)?;

    if shell.session().is_authenticated() {
        tracing::info!("restored a persisted session");
    } else {
        tracing::info!("starting logged out");
    }

    // Walk the guarded entry points once so the decisions show up in the log.
    for path in ["/home", "/books", "/admin/organizations", "/auth/login"] {
        let navigation = shell.navigator().navigate(path)?;
        tracing::info!(path, ?navigation, "navigation evaluated");
    }

    Ok(())
}
