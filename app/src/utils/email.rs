use crate::config::Config;
use crate::core::issuer::OTP_TTL_MINUTES;
use lettre::{
    AsyncTransport, Message,
    message::{Mailbox, MultiPart, SinglePart, header::ContentType},
};

pub async fn send_email(
    config: &Config,
    to: &str,
    subject: &str,
    html_body: &str,
    text_body: &str,
) -> Result<(), anyhow::Error> {
    let email = Message::builder()
        .from(Mailbox::new(
            Some("Dark Lab".to_string()),
            config.emailer.parse()?,
        ))
        .to(Mailbox::new(None, to.parse()?))
        .subject(subject)
        .multipart(
            MultiPart::alternative()
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_PLAIN)
                        .body(text_body.to_string()),
                )
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(html_body.to_string()),
                ),
        )?;

    config
        .transponder
        .send(email)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to send email: {}", e))?;
    Ok(())
}

pub async fn send_otp_email(config: &Config, to: &str, otp: &str) -> Result<(), anyhow::Error> {
    let subject = "🔑 Your Dark Lab Access Code";

    let html_body = format!(
        r#"
        <!DOCTYPE html>
        <html lang="en">
        <head>
            <meta charset="UTF-8">
            <meta name="viewport" content="width=device-width, initial-scale=1.0">
            <title>Dark Lab Access Code</title>
            <style>
                body {{
                    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
                    line-height: 1.6;
                    color: #e2e8f0;
                    max-width: 600px;
                    margin: 0 auto;
                    padding: 20px;
                    background: #0a0a0a;
                }}
                .email-container {{
                    background: #111111;
                    border: 1px solid #2d2d2d;
                    border-radius: 12px;
                    padding: 40px;
                }}
                .header {{
                    text-align: center;
                    margin-bottom: 30px;
                }}
                .logo {{
                    font-size: 32px;
                    font-weight: bold;
                    color: #22d3ee;
                    margin-bottom: 10px;
                }}
                .otp-section {{
                    background: #0a0a0a;
                    border: 2px dashed #2d2d2d;
                    border-radius: 8px;
                    padding: 20px;
                    text-align: center;
                    margin: 30px 0;
                }}
                .otp-code {{
                    font-size: 36px;
                    font-weight: bold;
                    color: #22d3ee;
                    letter-spacing: 4px;
                    font-family: 'Courier New', monospace;
                    margin: 10px 0;
                }}
                .expiry {{
                    color: #f87171;
                    font-weight: 500;
                    font-size: 14px;
                }}
                .footer {{
                    text-align: center;
                    margin-top: 30px;
                    padding-top: 20px;
                    border-top: 1px solid #2d2d2d;
                    color: #718096;
                    font-size: 14px;
                }}
            </style>
        </head>
        <body>
            <div class="email-container">
                <div class="header">
                    <div class="logo">🧪 Dark Lab</div>
                    <h1>Your access code</h1>
                </div>

                <div class="otp-section">
                    <div class="otp-code">{}</div>
                    <p class="expiry">⏰ Expires in {} minutes</p>
                </div>

                <p>Enter this code on the verification screen to continue.</p>

                <div class="footer">
                    <p>If you didn't request this code, you can safely ignore this email.</p>
                </div>
            </div>
        </body>
        </html>
        "#,
        otp, OTP_TTL_MINUTES
    );

    let text_body = format!(
        r#"
🧪 DARK LAB - Access Code

Your access code: {}

⏰ This code expires in {} minutes.

Enter this code on the verification screen to continue.

If you didn't request this code, you can safely ignore this email.
        "#,
        otp, OTP_TTL_MINUTES
    );

    send_email(config, to, subject, &html_body, &text_body).await
}
