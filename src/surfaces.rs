//! Static HTML surfaces: login form, home page, chat widget.
//!
//! These are opaque placeholders for independently built UI units. The router
//! gate only decides which of them to mount; their internals carry no logic
//! the gate depends on.

/// Login surface, mounted at `/login`. Posts back to `/login` on submit.
#[must_use]
pub fn login_page() -> String {
    r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Sign in</title>
  </head>
  <body>
    <main class="login">
      <h1>Sign in</h1>
      <form method="post" action="/login">
        <label for="username">Username</label>
        <input id="username" name="username" autocomplete="username" required>
        <button type="submit">Continue</button>
      </form>
    </main>
  </body>
</html>
"#
    .to_owned()
}

/// Authenticated composition: home as background content, chat widget mounted
/// after it so it floats on top. Both render in the same pass.
#[must_use]
pub fn authenticated_page(user: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Home</title>
  </head>
  <body>
    {home}
    {chat}
  </body>
</html>
"#,
        home = home_section(user),
        chat = chat_widget(),
    )
}

/// Home surface: background content behind the chat widget.
fn home_section(user: &str) -> String {
    format!(
        r#"<main class="home">
      <h1>Welcome, {user}</h1>
      <p>You are signed in.</p>
      <form method="post" action="/logout">
        <button type="submit">Sign out</button>
      </form>
    </main>"#,
        user = escape_html(user),
    )
}

/// Chat surface: floating widget overlaying the home content.
fn chat_widget() -> &'static str {
    r#"<aside class="chat-widget" style="position: fixed; bottom: 1rem; right: 1rem;">
      <h2>Chat</h2>
      <div class="chat-messages"></div>
      <input class="chat-input" placeholder="Type a message">
    </aside>"#
}

/// Minimal escaping for the user identifier interpolated into markup.
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "surfaces_test.rs"]
mod tests;
