use std::sync::Arc;

use teloxide::prelude::*;

use arb_core::domain::{ChatId, UserId};

use crate::router::AppState;

fn parse_command(text: &str) -> (String, String) {
    // Telegram may send `/cmd@botname arg1 ...`
    let mut parts = text.trim().splitn(2, char::is_whitespace);
    let first = parts.next().unwrap_or("").trim();
    let rest = parts.next().unwrap_or("").trim().to_string();

    let cmd = first
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or("")
        .to_lowercase();

    (cmd, rest)
}

pub async fn handle_command(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let (cmd, _args) = parse_command(text);
    let chat_id = ChatId(msg.chat.id.0);
    let user_id = UserId(user.id.0 as i64);

    let res = match cmd.as_str() {
        "start" => state.relay.handle_start(chat_id).await,
        "stats" => state.relay.handle_stats(chat_id, user_id).await,
        // Unknown commands are dropped, like the original's command filter.
        _ => Ok(()),
    };

    if let Err(e) = res {
        tracing::error!("command /{cmd} failed: {e}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_slash_botname_and_args() {
        assert_eq!(
            parse_command("/stats@my_relay_bot now"),
            ("stats".to_string(), "now".to_string())
        );
        assert_eq!(parse_command("/start"), ("start".to_string(), String::new()));
        assert_eq!(parse_command("/STATS"), ("stats".to_string(), String::new()));
    }
}
