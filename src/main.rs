use anyhow::Context;
use std::env;
use std::sync::Arc;

use portfolio_admin::api::adapter::outgoing::HttpAdminApi;
use portfolio_admin::api::application::ports::outgoing::AdminApi;
use portfolio_admin::auth::adapter::outgoing::identity_toolkit::{
    IdentityConfig, IdentityToolkitService,
};
use portfolio_admin::auth::application::ports::outgoing::IdentityProvider;
use portfolio_admin::config::{load_env_files, AdminConfig};
use portfolio_admin::content::application::view_models::{
    BlogsViewModel, CollectionViewModel, DashboardViewModel, ExperienceViewModel,
    MessagesViewModel, ProfileViewModel, ProjectsViewModel, ServicesViewModel, SkillsViewModel,
    TestimonialsViewModel,
};
use portfolio_admin::content::domain::AdminEntity;
use portfolio_admin::navigation::application::domain::{title_for, Navigation, Route};
use portfolio_admin::navigation::application::services::NavigationShell;
use portfolio_admin::shared::ui::{TerminalPrompt, UserPrompt};

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    load_env_files();

    let config = AdminConfig::from_env().context("Invalid API configuration")?;
    let identity_config = IdentityConfig::from_env().context("Invalid identity configuration")?;
    let identity: Arc<dyn IdentityProvider> = Arc::new(IdentityToolkitService::new(identity_config));

    let shell = NavigationShell::new(Arc::clone(&identity));
    let email = env::var("ADMIN_EMAIL").context("ADMIN_EMAIL must be set")?;
    let password = env::var("ADMIN_PASSWORD").context("ADMIN_PASSWORD must be set")?;
    shell.login(&email, &password).await?;

    let api: Arc<dyn AdminApi> = Arc::new(HttpAdminApi::new(&config, identity)?);
    let prompt: Arc<dyn UserPrompt> = Arc::new(TerminalPrompt::stdio());

    let path = env::args().nth(1).unwrap_or_else(|| "/".to_string());
    let route = match shell.navigate(&path) {
        Navigation::Render(route) => route,
        Navigation::Redirect(route) => {
            info!(from = %path, to = %route, "Redirected");
            route
        }
    };

    println!("== {} ==", title_for(route.path()));
    render(route, api, prompt).await
}

#[cfg(not(tarpaulin_include))]
async fn render(
    route: Route,
    api: Arc<dyn AdminApi>,
    prompt: Arc<dyn UserPrompt>,
) -> anyhow::Result<()> {
    match route {
        Route::Login => println!("Signed in."),
        Route::Dashboard => {
            let stats = DashboardViewModel::new(api).load().await;
            println!("Projects:        {}", stats.projects);
            println!("Blog posts:      {}", stats.blog_posts);
            println!("Unread messages: {}", stats.unread_messages);
        }
        Route::Projects => print_list(ProjectsViewModel::new(api, prompt)).await?,
        Route::Skills => print_list(SkillsViewModel::new(api, prompt)).await?,
        Route::Blogs => print_list(BlogsViewModel::new(api, prompt)).await?,
        Route::Experience => print_list(ExperienceViewModel::new(api, prompt)).await?,
        Route::Testimonials => print_list(TestimonialsViewModel::new(api, prompt)).await?,
        Route::Services => print_list(ServicesViewModel::new(api, prompt)).await?,
        Route::About => {
            let mut vm = ProfileViewModel::new(api, prompt);
            vm.load().await?;
            println!("{}", serde_json::to_string_pretty(vm.profile())?);
        }
        Route::Messages => {
            let mut vm = MessagesViewModel::new(api, prompt);
            vm.load().await?;
            for m in vm.items() {
                let marker = if m.read { " " } else { "*" };
                println!("{marker} [{}] {}: {}", m.id, m.sender(), m.message);
            }
            println!("{} unread", vm.unread_count());
        }
    }
    Ok(())
}

#[cfg(not(tarpaulin_include))]
async fn print_list<E: AdminEntity>(mut vm: CollectionViewModel<E>) -> anyhow::Result<()> {
    vm.load().await?;
    println!("{}", serde_json::to_string_pretty(vm.items())?);
    Ok(())
}
