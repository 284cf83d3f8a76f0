/**
 * Page Rendering
 *
 * The gateway's two HTML surfaces: the home view and the sign-up form.
 * Rendering is deliberately thin - inline markup from handlers, no
 * template engine. The home view is the only consumer of the current
 * identity outside the auth handlers: it greets a logged-in user and
 * offers the log-in form plus a sign-up link to everyone else.
 */

use axum::response::Html;

use crate::middleware::{CurrentIdentity, Identity};

/// Home view handler
///
/// Renders a greeting with a log-out link for an authenticated identity,
/// or the log-in form with a sign-up link for an anonymous one.
pub async fn home(CurrentIdentity(identity): CurrentIdentity) -> Html<String> {
    let body = match &identity {
        Identity::User(user) => format!(
            r#"<h1>Welcome back, {}!</h1>
<p><a href="/log-out">Log out</a></p>"#,
            escape_html(&user.username)
        ),
        Identity::Anonymous => concat!(
            "<h1>Please log in</h1>\n",
            r#"<form action="/log-in" method="post">"#,
            "\n",
            r#"  <label for="username">Username</label>"#,
            "\n",
            r#"  <input id="username" name="username" type="text" required>"#,
            "\n",
            r#"  <label for="password">Password</label>"#,
            "\n",
            r#"  <input id="password" name="password" type="password" required>"#,
            "\n",
            r#"  <button type="submit">Log in</button>"#,
            "\n",
            "</form>\n",
            r#"<p>New here? <a href="/sign-up">Sign up</a></p>"#,
        )
        .to_string(),
    };

    Html(page("Home", &body))
}

/// Sign-up form handler
pub async fn sign_up_form() -> Html<String> {
    let body = concat!(
        "<h1>Sign up</h1>\n",
        r#"<form action="/sign-up" method="post">"#,
        "\n",
        r#"  <label for="username">Username</label>"#,
        "\n",
        r#"  <input id="username" name="username" type="text" required>"#,
        "\n",
        r#"  <label for="password">Password</label>"#,
        "\n",
        r#"  <input id="password" name="password" type="password" required>"#,
        "\n",
        r#"  <button type="submit">Sign up</button>"#,
        "\n",
        "</form>\n",
        r#"<p><a href="/">Home</a></p>"#,
    );

    Html(page("Sign up", body))
}

/// Wrap a body fragment in the shared document shell
fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
</head>
<body>
{body}
</body>
</html>"#
    )
}

/// Escape text interpolated into markup
///
/// Usernames are caller-controlled and land inside the home view.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
