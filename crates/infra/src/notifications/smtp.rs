//! SMTP implementation of the Notifier port.
//!
//! Dispatch is best-effort: every failure is logged and reported through
//! the returned boolean, never as an error.

use async_trait::async_trait;
use hireflow_core::Notifier;
use hireflow_domain::{HireflowError, Interview, Result, SmtpConfig};
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, warn};

/// SMTP notifier for interview lifecycle emails.
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpNotifier {
    /// Create a notifier from SMTP settings. Fails when the relay host or
    /// from address is malformed.
    pub fn new(config: &SmtpConfig) -> Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| HireflowError::Config(format!("Invalid SMTP relay: {e}")))?
            .port(config.port)
            .credentials(Credentials::new(config.username.clone(), config.password.clone()))
            .build();

        let from = format!("{} <{}>", config.from_name, config.from_address)
            .parse::<Mailbox>()
            .map_err(|e| HireflowError::Config(format!("Invalid SMTP from address: {e}")))?;

        Ok(Self { transport, from })
    }

    async fn send_html(&self, to: &str, subject: &str, body: String) -> bool {
        let mailbox = match to.parse::<Mailbox>() {
            Ok(mailbox) => mailbox,
            Err(e) => {
                warn!(to, error = %e, "invalid recipient address");
                return false;
            }
        };

        let message = match Message::builder()
            .from(self.from.clone())
            .to(mailbox)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(body)
        {
            Ok(message) => message,
            Err(e) => {
                warn!(to, error = %e, "failed to build email");
                return false;
            }
        };

        match self.transport.send(message).await {
            Ok(_) => {
                debug!(to, subject, "sent email");
                true
            }
            Err(e) => {
                warn!(to, error = %e, "failed to send email");
                false
            }
        }
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn notify_scheduled(&self, interview: &Interview) -> bool {
        let candidate_subject = format!("Interview Scheduled: {}", interview.job_title);
        let interviewer_subject =
            format!("Interview Scheduled with {}", interview.candidate_name);

        let candidate_sent = self
            .send_html(&interview.candidate_email, &candidate_subject, scheduled_body(interview, true))
            .await;
        let interviewer_sent = self
            .send_html(
                &interview.interviewer_email,
                &interviewer_subject,
                scheduled_body(interview, false),
            )
            .await;

        candidate_sent && interviewer_sent
    }

    async fn notify_cancelled(&self, interview: &Interview) -> bool {
        let subject = format!("Interview Cancelled: {}", interview.job_title);
        let body = cancelled_body(interview);

        let candidate_sent =
            self.send_html(&interview.candidate_email, &subject, body.clone()).await;
        let interviewer_sent =
            self.send_html(&interview.interviewer_email, &subject, body).await;

        candidate_sent && interviewer_sent
    }
}

fn format_start_time(interview: &Interview) -> String {
    interview.start_time.format("%b %d, %Y at %H:%M").to_string()
}

fn scheduled_body(interview: &Interview, for_candidate: bool) -> String {
    let recipient =
        if for_candidate { &interview.candidate_name } else { &interview.interviewer_name };
    let other_party = if for_candidate { "Interviewer" } else { "Candidate" };
    let other_party_name =
        if for_candidate { &interview.interviewer_name } else { &interview.candidate_name };

    let meet_link_row = match &interview.google_meet_link {
        Some(link) if !link.is_empty() => format!(
            "<p><strong>Meeting Link:</strong> <a href='{link}'>Join Google Meet</a></p>"
        ),
        _ => String::new(),
    };

    format!(
        "<h2>Interview Scheduled</h2>\n\
         <p>Hello {recipient},</p>\n\
         <p>Your interview has been successfully scheduled. Here are the details:</p>\n\
         <div style='background-color: #f5f5f5; padding: 20px; margin: 20px 0; border-radius: 5px;'>\n\
         <h3>Interview Details</h3>\n\
         <p><strong>Position:</strong> {job_title}</p>\n\
         <p><strong>Date &amp; Time:</strong> {start_time} UTC</p>\n\
         <p><strong>Duration:</strong> {duration} minutes</p>\n\
         <p><strong>{other_party}:</strong> {other_party_name}</p>\n\
         {meet_link_row}\n\
         </div>\n\
         <p>Please make sure to:</p>\n\
         <ul>\n\
         <li>Join the meeting 5 minutes early</li>\n\
         <li>Test your camera and microphone beforehand</li>\n\
         <li>Have a stable internet connection</li>\n\
         <li>Prepare any questions you may have</li>\n\
         </ul>\n\
         <p>If you need to reschedule or have any questions, please contact us immediately.</p>\n\
         <p>Good luck!</p>\n\
         <p>Interview Scheduler Team</p>",
        job_title = interview.job_title,
        start_time = format_start_time(interview),
        duration = interview.duration_minutes(),
    )
}

fn cancelled_body(interview: &Interview) -> String {
    format!(
        "<h2>Interview Cancelled</h2>\n\
         <p>The interview for <strong>{}</strong> scheduled for {} UTC has been cancelled.</p>\n\
         <p>If you have any questions, please contact the interviewer directly.</p>",
        interview.job_title,
        format_start_time(interview),
    )
}
