use anyhow::{Context, Result};
use futures::future::{FutureExt, LocalBoxFuture};
use futures::stream::{FuturesUnordered, StreamExt};
use log::info;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use super::commands::{handle_message, TRIGGER};
use crate::services::live_game::LiveGameService;
use crate::services::lookups::GameApi;

/// Treat every stdin line as a chat message and print the replies
pub async fn run<A: GameApi>(service: &LiveGameService<A>) -> Result<usize> {
    info!("Listening for {} commands on stdin", TRIGGER);
    let reader = BufReader::new(tokio::io::stdin());
    serve_lines(service, reader, tokio::io::stdout()).await
}

/// Answer commands read line by line. Commands are handled concurrently and
/// each reply is written as soon as it is ready. Returns the number of replies.
pub async fn serve_lines<A, R, W>(
    service: &LiveGameService<A>,
    reader: R,
    mut writer: W,
) -> Result<usize>
where
    A: GameApi,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut pending: FuturesUnordered<LocalBoxFuture<'_, Option<String>>> =
        FuturesUnordered::new();
    let mut input_open = true;
    let mut replies = 0;

    loop {
        tokio::select! {
            line = lines.next_line(), if input_open => {
                match line.context("Failed to read command")? {
                    Some(line) => pending.push(answer(service, line).boxed_local()),
                    None => input_open = false,
                }
            }
            Some(reply) = pending.next(), if !pending.is_empty() => {
                if let Some(reply) = reply {
                    write_reply(&mut writer, &reply).await?;
                    replies += 1;
                }
            }
            else => break,
        }
    }

    info!("Input closed after {} replies", replies);
    Ok(replies)
}

async fn answer<A: GameApi>(service: &LiveGameService<A>, line: String) -> Option<String> {
    handle_message(service, &line).await
}

async fn write_reply<W: AsyncWrite + Unpin>(writer: &mut W, reply: &str) -> Result<()> {
    writer.write_all(reply.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await.context("Failed to write reply")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::commands::USAGE;
    use crate::config::AppConfig;
    use crate::domain::ChampionCatalog;
    use crate::services::fakes::{participant, ranked, FakeGameApi};
    use std::sync::Arc;
    use std::time::Duration;

    fn service() -> LiveGameService<FakeGameApi> {
        let api = FakeGameApi::new()
            .with_player("Faker", "abc123")
            .with_match("abc123", 1, vec![participant(1, "p1"), participant(2, "p2")])
            .with_stats("p1", vec![ranked("GOLD", "II", 10, 10)])
            .with_stats("p2", vec![ranked("SILVER", "I", 5, 15)])
            .with_delay(Duration::from_millis(10));
        let catalog: ChampionCatalog = [(1, "Ahri"), (2, "Garen")].into_iter().collect();
        LiveGameService::new(api, Arc::new(catalog), &AppConfig::default())
    }

    #[tokio::test]
    async fn test_one_reply_per_command() {
        let service = service();
        let input = b"!currentLoL Faker\nnice game\n!currentLoL\n!currentLoL Nobody\n";
        let mut output = Vec::new();

        let replies = serve_lines(&service, &input[..], &mut output).await.unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(replies, 3);
        assert!(output.contains("|       Ahri|    GOLD II|   10/10| 50%|"));
        assert!(output.contains(USAGE));
        assert!(output.contains("Summoner does not exist."));
    }

    #[tokio::test]
    async fn test_empty_input() {
        let service = service();
        let mut output = Vec::new();

        let replies = serve_lines(&service, &b""[..], &mut output).await.unwrap();

        assert_eq!(replies, 0);
        assert!(output.is_empty());
    }
}
