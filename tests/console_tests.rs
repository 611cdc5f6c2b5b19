use std::io::IsTerminal;
use stockroom::ui::{self, Console};

#[tokio::test]
async fn scripted_console_reads_secret_as_plain_line() {
    let mut console = Console::new("s3cret\r\n".as_bytes(), Vec::new());
    assert!(!console.masks_secrets());

    let secret = console.prompt_secret("Password").await.unwrap();
    assert_eq!(secret.as_deref(), Some("s3cret"));

    let (_, out) = console.into_inner();
    assert_eq!(String::from_utf8(out).unwrap(), "Password: ");
}

#[tokio::test]
async fn secret_prompt_reports_closed_input() {
    let mut console = Console::new("".as_bytes(), Vec::new());
    assert_eq!(console.prompt_secret("Password").await.unwrap(), None);
}

#[tokio::test]
async fn stdio_masks_secrets_on_a_terminal() {
    let console = ui::stdio();
    assert_eq!(console.masks_secrets(), std::io::stdin().is_terminal());
}
