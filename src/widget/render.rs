//! HTML templating for the output container.
//!
//! Every user-supplied string goes through [`escape`] before it is
//! interpolated; ids are integers and are formatted directly.

use crate::users::User;

pub const NO_USERS_HTML: &str = r#"<p class="no-data">No users found.</p>"#;

/// Neutralizes HTML-significant characters. Absent input renders as empty.
#[must_use]
pub fn escape(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[must_use]
pub fn count_line(count: usize) -> String {
    format!(r#"<p class="user-count">Found {count} users</p>"#)
}

/// Renders one user card.
#[must_use]
pub fn user_card(user: &User) -> String {
    let name = escape(user.name.as_deref());
    let email = escape(user.email.as_deref());
    let city = escape(Some(user.city()));

    format!(
        r#"<div class="user-card">
    <div class="user-id">#{id}</div>
    <h3>{name}</h3>
    <p>
        <span class="label">📧 Email:</span>
        <a href="mailto:{email}">{email}</a>
    </p>
    <p>
        <span class="label">🏙️ City:</span>
        {city}
    </p>
</div>"#,
        id = user.id
    )
}

/// Renders the whole list: the placeholder when empty, otherwise the count
/// line followed by one card per user in order.
#[must_use]
pub fn user_list(users: &[User]) -> String {
    if users.is_empty() {
        return NO_USERS_HTML.to_string();
    }

    let mut html = count_line(users.len());
    for user in users {
        html.push('\n');
        html.push_str(&user_card(user));
    }
    html
}

/// Wraps rendered cards in a standalone page.
#[must_use]
pub fn page(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Users</title>
</head>
<body>
<div id="userList">
{body}
</div>
</body>
</html>
"#
    )
}
