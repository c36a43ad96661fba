//! Command-line front end: argument parsing and plain-text rendering.

use std::path::PathBuf;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::features::auth::SessionStatus;
use crate::features::comment::CommentState;
use crate::features::news::NewsList;
use crate::logging::init_tracing;
use crate::portal::Portal;
use crate::schema::{Category, Comment, Credentials, News, Role, User, UserInput};
use crate::session::GuardDecision;
use crate::state::{CommandStatus, PageCache, Resource};
use crate::view::{can_modify, should_fetch_replies, PageLink, Pager, ProfileForm, UserListView};

/// Environment variable holding the password for `--email`.
pub const PASSWORD_ENV: &str = "NEWSDESK_PASSWORD";

#[derive(Parser, Debug)]
#[command(name = "newsdesk", author, version, about = "Terminal client for the news portal")]
pub struct Cli {
    /// Override the API base URL (also NEWSDESK_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log in with this email before running the command
    #[arg(long, global = true, value_name = "EMAIL")]
    pub email: Option<String>,

    /// Password for --email, or the confirmation password of admin clean commands
    #[arg(long, global = true, env = PASSWORD_ENV, hide_env_values = true)]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Latest news, one page at a time
    News {
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },
    /// Featured news
    Featured,
    /// A single article with its comments
    Article { id: String },
    /// News of one category
    Category {
        name: Category,
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },
    /// Search news by text
    Search { text: String },
    /// Comment threads of an article
    Comments {
        news_id: String,
        /// Also fetch the replies of every thread that has any
        #[arg(long)]
        replies: bool,
    },
    /// Post a comment, or a reply with --parent
    Comment {
        news_id: String,
        text: String,
        #[arg(long, value_name = "COMMENT_ID")]
        parent: Option<String>,
    },
    /// Replace the text of one of your comments
    EditComment {
        news_id: String,
        comment_id: String,
        text: String,
    },
    /// Delete one of your comments
    DeleteComment { news_id: String, comment_id: String },
    /// Like a comment, or remove your like
    LikeComment { news_id: String, comment_id: String },
    /// Like an article, or remove your like
    LikeNews { id: String },
    /// Weather at your approximate location
    Weather,
    /// Show your profile, or update it with any of the options
    Profile {
        #[arg(long)]
        username: Option<String>,
        #[arg(long = "new-email", value_name = "EMAIL")]
        new_email: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        lastname: Option<String>,
        #[arg(long, value_name = "YYYY-MM-DD")]
        birthday: Option<NaiveDate>,
        #[arg(long)]
        subscription: Option<bool>,
    },
    /// Delete your account
    DeleteAccount {
        /// Required to actually delete
        #[arg(long)]
        confirm: bool,
    },
    /// Check whether a route may be opened with the current session
    Route { path: String },
    /// Change your password
    Password {
        #[arg(long)]
        current: String,
        #[arg(long)]
        new: String,
        #[arg(long)]
        confirm: String,
    },
    /// Create an account (password from --password) and log in
    Register {
        username: String,
        email: String,
        name: String,
        lastname: String,
        #[arg(value_name = "YYYY-MM-DD")]
        birthday: NaiveDate,
        #[arg(long)]
        subscribe: bool,
    },
    /// End the session
    Logout,
    /// Moderation commands (admin only)
    Admin {
        #[command(subcommand)]
        action: AdminCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum AdminCommand {
    /// Deactivated news
    Inactive {
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },
    /// Every account, optionally filtered by username or email
    Users {
        #[arg(long)]
        filter: Option<String>,
        /// Reveal this many extra batches
        #[arg(long, default_value_t = 0)]
        more: usize,
    },
    /// One account by id
    User { id: String },
    /// Flip the active flag of an article
    Toggle {
        news_id: String,
        /// Inactive page to reload afterwards
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },
    /// Import news from the upstream source
    Fetch,
    /// Permanently delete inactive news (password from --password)
    CleanNews,
    /// Permanently delete inactive accounts (password from --password)
    CleanUsers,
    /// Delete an account
    DeleteUser { id: String },
    /// Change the role of an account
    SetRole { id: String, role: Role },
}

/// Load configuration, open the session and run the command.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let config = config.with_base_url_override(cli.api_url.clone())?;
    init_tracing(&config.logging);
    tracing::debug!(command = ?cli.command, "Starting");

    let portal = Portal::new(config).context("Failed to set up the API client")?;

    match (&cli.email, &cli.command) {
        (Some(email), _) => {
            let Some(password) = cli.password.clone() else {
                bail!("--email needs a password (--password or {})", PASSWORD_ENV);
            };
            let credentials = Credentials {
                email: email.clone(),
                password,
            };
            if !portal.login(&credentials).await {
                bail!(error_of(&portal.auth().snapshot().error, "Login failed"));
            }
        }
        (None, Command::Register { .. }) => {}
        (None, _) => {
            portal.start().await;
        }
    }

    execute(&portal, cli.command, cli.password.as_deref()).await
}

async fn execute(portal: &Portal, command: Command, password: Option<&str>) -> anyhow::Result<()> {
    match command {
        Command::News { page } => show_page(portal, NewsList::Latest, page).await,

        Command::Featured => {
            portal.load_featured().await;
            let featured = portal.news().snapshot().featured;
            let news = resource(featured, "Error loading featured news")?;
            news.iter().for_each(print_news_line);
            Ok(())
        }

        Command::Article { id } => {
            portal.news().load_article(&id).await;
            let article = resource(portal.news().snapshot().article, "Error loading the article")?;
            print_article(&article);
            show_comments(portal, &id, false).await
        }

        Command::Category { name, page } => {
            println!("{}", name.display_name());
            show_page(portal, NewsList::Category(name), page).await
        }

        Command::Search { text } => {
            portal.news().search(&text).await;
            let hits = resource(portal.news().snapshot().search, "Error searching news")?;
            if hits.is_empty() {
                println!("No results for '{}'", text);
            }
            hits.iter().for_each(print_news_line);
            Ok(())
        }

        Command::Comments { news_id, replies } => show_comments(portal, &news_id, replies).await,

        Command::Comment {
            news_id,
            text,
            parent,
        } => {
            require_session(portal)?;
            if !portal.comments().add(&news_id, &text, parent.as_deref()).await {
                bail!(error_of(&portal.comments().snapshot().error, "Error saving comment"));
            }
            show_comments(portal, &news_id, false).await
        }

        Command::EditComment {
            news_id,
            comment_id,
            text,
        } => {
            own_comment(portal, &news_id, &comment_id).await?;
            if !portal.comments().update(&news_id, &comment_id, &text).await {
                bail!(error_of(&portal.comments().snapshot().error, "Error updating comment"));
            }
            println!("Comment updated");
            Ok(())
        }

        Command::DeleteComment {
            news_id,
            comment_id,
        } => {
            own_comment(portal, &news_id, &comment_id).await?;
            if !portal.comments().delete(&news_id, &comment_id).await {
                bail!(error_of(&portal.comments().snapshot().error, "Error deleting comment"));
            }
            println!("Comment deleted");
            Ok(())
        }

        Command::LikeComment {
            news_id,
            comment_id,
        } => {
            let username = require_session(portal)?;
            portal.comments().load(&news_id).await;
            if !portal.comments().toggle_like(&comment_id, &username).await {
                ensure_done(&portal.comments().snapshot().result, "Error saving like")?;
            }
            let comments = portal.comments().snapshot();
            let verb = if comments.is_liked_by(&comment_id, &username) {
                "Liked"
            } else {
                "Unliked"
            };
            println!("{} ({} likes)", verb, comments.like_count(&comment_id));
            Ok(())
        }

        Command::LikeNews { id } => {
            require_session(portal)?;
            portal.users().toggle_news_like(&id).await;
            let users = portal.users().snapshot();
            ensure_done(&users.result, "Error saving like")?;
            println!("{}", if users.likes_news(&id) { "Liked" } else { "Unliked" });
            Ok(())
        }

        Command::Weather => {
            portal.load_weather().await;
            let location = portal.location().snapshot();
            let weather = resource(portal.weather().snapshot().weather, "Error loading weather")
                .or_else(|err| match &location.location.error {
                    Some(message) => bail!(message.clone()),
                    None => Err(err),
                })?;
            let place = weather
                .city
                .clone()
                .or_else(|| location.location.data.and_then(|l| l.city))
                .unwrap_or_else(|| "your location".to_string());
            println!("{}: {:.1}°C, {}", place, weather.temperature, weather.description);
            if let Some(humidity) = weather.humidity {
                println!("Humidity: {:.0}%", humidity);
            }
            if let Some(wind) = weather.wind_speed {
                println!("Wind: {:.1} m/s", wind);
            }
            Ok(())
        }

        Command::Profile {
            username,
            new_email,
            name,
            lastname,
            birthday,
            subscription,
        } => {
            require_session(portal)?;
            let user = resource(portal.users().snapshot().profile, "Error loading profile")?;

            let mut form = ProfileForm::from_user(&user);
            form.username = username.unwrap_or(form.username);
            form.email = new_email.unwrap_or(form.email);
            form.name = name.unwrap_or(form.name);
            form.lastname = lastname.unwrap_or(form.lastname);
            form.birthday = birthday.or(form.birthday);
            form.subscription = subscription.unwrap_or(form.subscription);

            let changes = form.changes(&user);
            if changes.is_empty() {
                print_user(&user);
                return Ok(());
            }
            if !portal.users().update(&changes).await {
                ensure_done(&portal.users().snapshot().result, "Error updating profile")?;
            }
            let user = resource(portal.users().snapshot().profile, "Error loading profile")?;
            print_user(&user);
            Ok(())
        }

        Command::DeleteAccount { confirm } => {
            require_session(portal)?;
            if !confirm {
                bail!("refusing to delete the account without --confirm");
            }
            if !portal.delete_account().await {
                ensure_done(&portal.users().snapshot().result, "Error deleting account")?;
            }
            println!("Account deleted");
            Ok(())
        }

        Command::Route { path } => {
            let (route, decision) = portal.navigate(&path);
            match decision {
                GuardDecision::Allow => println!("{} allowed", route),
                GuardDecision::Redirect(target) => println!("{} redirected to {}", route, target),
            }
            Ok(())
        }

        Command::Password {
            current,
            new,
            confirm,
        } => {
            require_session(portal)?;
            if !portal.auth().change_password(&current, &new, &confirm).await {
                ensure_done(&portal.auth().snapshot().result, "Error changing password")?;
            }
            println!("Password changed");
            Ok(())
        }

        Command::Register {
            username,
            email,
            name,
            lastname,
            birthday,
            subscribe,
        } => {
            let input = UserInput {
                name,
                lastname,
                birthday: Some(birthday),
                subscription: subscribe,
                email,
                password: password.map(str::to_string),
                username,
                role: Role::User,
            };
            if !portal.register(&input).await {
                bail!(error_of(&portal.auth().snapshot().error, "Error registering user"));
            }
            let auth = portal.auth().snapshot();
            println!("Welcome, {}", auth.username().unwrap_or(&input.username));
            Ok(())
        }

        Command::Logout => {
            if portal.auth().snapshot().status != SessionStatus::LoggedIn {
                println!("Not logged in");
                return Ok(());
            }
            portal.logout().await;
            println!("Logged out");
            Ok(())
        }

        Command::Admin { action } => {
            require_admin(portal)?;
            execute_admin(portal, action, password).await
        }
    }
}

async fn execute_admin(portal: &Portal, action: AdminCommand, password: Option<&str>) -> anyhow::Result<()> {
    match action {
        AdminCommand::Inactive { page } => show_page(portal, NewsList::Inactive, page).await,

        AdminCommand::Users { filter, more } => {
            portal.users().load_users().await;
            let users = resource(portal.users().snapshot().users, "Error loading users")?;

            let mut view = UserListView::new(portal.config().paging.user_increment);
            if let Some(filter) = &filter {
                view.set_filter(filter);
            }
            for _ in 0..more {
                view.load_more();
            }
            for user in view.visible(&users) {
                print_user_line(user);
            }
            if view.has_more(&users) {
                println!("... more available (--more {})", more + 1);
            }
            Ok(())
        }

        AdminCommand::User { id } => {
            portal.users().load_user(&id).await;
            let user = resource(portal.users().snapshot().selected, "Error loading user")?;
            print_user(&user);
            Ok(())
        }

        AdminCommand::Toggle { news_id, page } => {
            if !portal.toggle_news_status(&news_id, page).await {
                ensure_done(&portal.news().snapshot().result, "Error changing news status")?;
            }
            println!("Status changed");
            show_page(portal, NewsList::Inactive, page).await
        }

        AdminCommand::Fetch => {
            if !portal.news().fetch_from_source().await {
                ensure_done(&portal.news().snapshot().result, "Error fetching news")?;
            }
            println!("News imported");
            Ok(())
        }

        AdminCommand::CleanNews => {
            if !portal.news().clean(password.unwrap_or_default()).await {
                ensure_done(&portal.news().snapshot().result, "Error cleaning news")?;
            }
            let news = portal.news().snapshot();
            println!("{}", news.last_message.as_deref().unwrap_or("Inactive news deleted"));
            Ok(())
        }

        AdminCommand::CleanUsers => {
            if !portal.users().clean(password.unwrap_or_default()).await {
                ensure_done(&portal.users().snapshot().result, "Error cleaning users")?;
            }
            println!("Inactive users deleted");
            Ok(())
        }

        AdminCommand::DeleteUser { id } => {
            if !portal.users().delete_user(&id).await {
                ensure_done(&portal.users().snapshot().result, "Error deleting user")?;
            }
            println!("User deleted");
            Ok(())
        }

        AdminCommand::SetRole { id, role } => {
            if !portal.auth().change_role(&id, role).await {
                ensure_done(&portal.auth().snapshot().result, "Error changing role")?;
            }
            println!("Role changed to {}", role);
            Ok(())
        }
    }
}

async fn show_comments(portal: &Portal, news_id: &str, with_replies: bool) -> anyhow::Result<()> {
    portal.comments().load(news_id).await;

    if with_replies {
        let parents: Vec<String> = portal
            .comments()
            .store()
            .read(|s| s.threads.iter().map(|t| t.comment.id.clone()).collect());
        for parent in parents {
            if portal.comments().store().read(|s| should_fetch_replies(s, &parent)) {
                portal.comments().load_replies(&parent).await;
            }
        }
    }

    let comments = portal.comments().snapshot();
    if let Some(error) = &comments.error {
        bail!(error.clone());
    }
    print_comments(&comments);
    Ok(())
}

/// Load the threads and make sure `comment_id` belongs to the caller.
async fn own_comment(portal: &Portal, news_id: &str, comment_id: &str) -> anyhow::Result<()> {
    require_session(portal)?;
    portal.comments().load(news_id).await;
    for thread in portal.comments().snapshot().threads {
        if thread.comment.reply_count > 0 {
            portal.comments().load_replies(&thread.comment.id).await;
        }
    }
    let comments = portal.comments().snapshot();
    let auth = portal.auth().snapshot();
    match comments.find(comment_id) {
        Some(comment) if can_modify(comment, &auth) => Ok(()),
        Some(_) => bail!("only the author can change this comment"),
        None => bail!("comment {} not found on article {}", comment_id, news_id),
    }
}

fn require_session(portal: &Portal) -> anyhow::Result<String> {
    match portal.auth().snapshot().session {
        Some(session) if portal.auth().is_authenticated() => Ok(session.username),
        _ => bail!("this command needs a session (use --email)"),
    }
}

fn require_admin(portal: &Portal) -> anyhow::Result<()> {
    if !portal.auth().snapshot().is_admin() {
        bail!("this command needs an admin session");
    }
    Ok(())
}

fn error_of(error: &Option<String>, fallback: &str) -> String {
    error.clone().unwrap_or_else(|| fallback.to_string())
}

fn resource<T>(resource: Resource<T>, fallback: &str) -> anyhow::Result<T> {
    match (resource.data, resource.error) {
        (_, Some(error)) => bail!(error),
        (Some(data), None) => Ok(data),
        (None, None) => bail!(fallback.to_string()),
    }
}

fn ensure_done(status: &CommandStatus, fallback: &str) -> anyhow::Result<()> {
    if status.succeeded {
        return Ok(());
    }
    bail!(error_of(&status.error, fallback))
}

async fn show_page(portal: &Portal, list: NewsList, page: u32) -> anyhow::Result<()> {
    let Some(page) = portal.go_to_page(list, page).await else {
        bail!("Page {} is out of range", page);
    };
    let news = portal.news().snapshot();
    print_page(news.list(list), page, portal.page_size(list))
}

fn print_page(cache: &PageCache<News>, page: u32, page_size: u32) -> anyhow::Result<()> {
    let Some(records) = cache.page(page) else {
        bail!(error_of(&cache.error, "Error loading news"));
    };
    if records.is_empty() {
        println!("No news");
    }
    records.iter().for_each(print_news_line);

    let pager = Pager::new(page, cache.total, page_size);
    if pager.total_pages > 1 {
        let bar: Vec<String> = pager
            .links()
            .into_iter()
            .map(|link| match link {
                PageLink::Page(p) if p == page => format!("[{}]", p),
                PageLink::Page(p) => p.to_string(),
                PageLink::Gap => "…".to_string(),
            })
            .collect();
        println!();
        println!("{}", bar.join(" "));
    }
    Ok(())
}

fn print_news_line(news: &News) {
    let date = news
        .published_at()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let inactive = if news.is_active() { "" } else { " [inactive]" };
    println!("{}  {}  {} ({}){}", news.id, date, news.title, news.publisher, inactive);
}

fn print_article(news: &News) {
    println!("{}", news.title);
    let mut byline = news.publisher.clone();
    if let Some(date) = news.published_at() {
        byline.push_str(&format!(" · {}", date.format("%Y-%m-%d %H:%M")));
    }
    if let Some(category) = news.category {
        byline.push_str(&format!(" · {}", category.display_name()));
    }
    println!("{}", byline);
    println!();
    println!("{}", news.snippet);
    println!("{}", news.url);
    println!("{} likes", news.like_count);
}

fn print_comments(comments: &CommentState) {
    if comments.threads.is_empty() {
        println!("No comments");
        return;
    }
    println!();
    for thread in &comments.threads {
        print_comment(comments, &thread.comment, 0);
        for reply in &thread.replies {
            print_comment(comments, reply, 1);
        }
        let hidden = thread.comment.reply_count as usize;
        if thread.replies.is_empty() && hidden > 0 {
            println!("    ({} replies)", hidden);
        }
    }
}

fn print_comment(comments: &CommentState, comment: &Comment, depth: usize) {
    let indent = "    ".repeat(depth);
    let when = comment
        .created
        .map(|c| c.format(" %Y-%m-%d %H:%M").to_string())
        .unwrap_or_default();
    println!(
        "{}{} {}{} ♥{}",
        indent,
        comment.id,
        comment.username,
        when,
        comments.like_count(&comment.id)
    );
    println!("{}  {}", indent, comment.content);
}

fn print_user(user: &User) {
    println!("{} <{}>", user.username, user.email);
    println!("Name: {} {}", user.name, user.lastname);
    if let Some(birthday) = user.birthday {
        println!("Birthday: {}", birthday.format("%Y-%m-%d"));
    }
    println!("Role: {}", user.role);
    println!("Subscribed: {}", if user.subscription { "yes" } else { "no" });
    if let Some(id) = &user.id {
        println!("Id: {}", id);
    }
}

fn print_user_line(user: &User) {
    let inactive = if user.active.unwrap_or(true) { "" } else { " [inactive]" };
    println!(
        "{}  {} <{}> {}{}",
        user.id.as_deref().unwrap_or("-"),
        user.username,
        user.email,
        user.role,
        inactive
    );
}
