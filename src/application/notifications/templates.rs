// src/application/notifications/templates.rs
//
// Every template is a pure function from structured parameters to a
// (subject, html) pair. Plain string interpolation, no templating engine,
// no localisation. Wording and markup follow the journal's house style.

/// Rendered subject/body pair ready for the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailContent {
    pub subject: String,
    pub html: String,
}

pub fn registration_welcome(user_name: &str, portal_url: &str) -> EmailContent {
    let subject = "Welcome to Law Nation! \u{2696}\u{fe0f}".to_string();
    let html = format!(
        r#"<div style="font-family: 'Helvetica', Arial, sans-serif; max-width: 600px; margin: auto; border: 2px solid #d32f2f; border-radius: 12px; overflow: hidden; background-color: #ffffff;">
  <div style="background-color: #d32f2f; padding: 30px; text-align: center;">
    <h1 style="color: #ffffff; margin: 0; font-size: 32px; letter-spacing: 2px; font-weight: bold; text-transform: uppercase;">LAW NATION</h1>
    <p style="color: #ffcdd2; margin: 5px 0 0 0; font-size: 12px; letter-spacing: 1px;">THE ULTIMATE LEGAL RESEARCH PORTAL</p>
  </div>
  <div style="padding: 40px 30px; color: #333; line-height: 1.8; text-align: center;">
    <h2 style="color: #d32f2f; font-size: 26px; margin-bottom: 20px;">Registration Successful</h2>
    <p style="font-size: 17px; color: #444;">Dear {user_name}, we are honored to welcome you to <b>Law Nation Prime Times</b>. Your gateway to premium legal scholarship and expert research analysis is now active.</p>
    <div style="margin: 35px 0;">
      <a href="{portal_url}" style="background-color: #d32f2f; color: #ffffff; padding: 15px 35px; text-decoration: none; border-radius: 6px; font-weight: bold; font-size: 15px;">ACCESS PORTAL</a>
    </div>
    <div style="font-size: 13px; color: #777;">
      <p style="margin: 0;">Regards,</p>
      <p style="margin: 5px 0; font-weight: bold; color: #d32f2f;">Executive Team, Law Nation</p>
    </div>
  </div>
</div>"#
    );
    EmailContent { subject, html }
}

pub fn submission_received(author_name: &str, article_title: &str, article_id: &str) -> EmailContent {
    let subject = "Article Received".to_string();
    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: auto; border: 1px solid #d32f2f; border-radius: 8px; overflow: hidden;">
  <div style="background-color: #d32f2f; padding: 20px; text-align: center;">
    <h1 style="color: #ffffff; margin: 0; font-size: 22px;">LAW NATION</h1>
  </div>
  <div style="padding: 30px;">
    <h3 style="color: #d32f2f; border-bottom: 2px solid #f44336; padding-bottom: 10px;">Submission Received</h3>
    <p>Dear {author_name}, your article <b>"{article_title}"</b> has been received for review.</p>
    <p style="font-size: 14px; color: #666;"><b>Article ID:</b> {article_id}</p>
  </div>
</div>"#
    );
    EmailContent { subject, html }
}

pub fn editor_assigned_author_notice(article_title: &str) -> EmailContent {
    let subject = "Status Update: Editor Assigned".to_string();
    let html = format!(
        r#"<div style="font-family: 'Georgia', serif; max-width: 600px; margin: auto; border: 1px solid #d4af37; border-radius: 8px; overflow: hidden;">
  <div style="background-color: #1a1a1a; padding: 20px; text-align: center;">
    <h1 style="color: #d4af37; margin: 0; font-size: 22px;">LAW NATION</h1>
  </div>
  <div style="padding: 30px; text-align: center;">
    <h2 style="color: #1a1a1a;">Editor Assigned</h2>
    <p style="font-size: 16px;">Your article <b>"{article_title}"</b> has been successfully assigned to an editor for formal review.</p>
    <p style="color: #555;">You will be notified once the review process is complete.</p>
  </div>
</div>"#
    );
    EmailContent { subject, html }
}

pub fn review_task_assigned(
    editor_name: &str,
    article_title: &str,
    author_name: &str,
) -> EmailContent {
    EmailContent {
        subject: "New Review Task Assigned".to_string(),
        html: format!(
            r#"<h2>New Assignment</h2><p>Editor {editor_name}, you have a new article "{article_title}" from {author_name} to review.</p>"#
        ),
    }
}

pub fn revision_resubmitted(editor_name: &str, article_title: &str) -> EmailContent {
    EmailContent {
        subject: "Revised Manuscript Received".to_string(),
        html: format!(
            r#"<h2>Revision Received</h2><p>Editor {editor_name}, the revised manuscript of "{article_title}" is ready for another review pass.</p>"#
        ),
    }
}

pub fn article_approved(author_name: &str, article_title: &str) -> EmailContent {
    EmailContent {
        subject: "Article Approved and Published".to_string(),
        html: format!(
            r#"<h2>Congratulations!</h2><p>Dear {author_name}, your article "<strong>{article_title}</strong>" has been published.</p>"#
        ),
    }
}

pub fn correction_request(
    article_title: &str,
    editor_comments: Option<&str>,
) -> EmailContent {
    let comments_block = editor_comments
        .map(|comments| format!("<p>Comments: {comments}</p>"))
        .unwrap_or_default();
    EmailContent {
        subject: "Article Correction Required".to_string(),
        html: format!(
            r#"<h2>Correction Needed</h2><p>Your article "{article_title}" needs updates.</p>{comments_block}"#
        ),
    }
}

pub fn publication_notice(article_title: &str, author_name: &str) -> EmailContent {
    EmailContent {
        subject: "Article Published".to_string(),
        html: format!(
            r#"<h2>Publication Record</h2><p>"{article_title}" by {author_name} is now live on the portal.</p>"#
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approval_contains_author_and_title() {
        let content = article_approved("Priya", "Contract Law Basics");
        assert_eq!(content.subject, "Article Approved and Published");
        assert!(content.html.contains("Priya"));
        assert!(content.html.contains("Contract Law Basics"));
    }

    #[test]
    fn correction_request_includes_comments_only_when_present() {
        let with = correction_request("Contract Law Basics", Some("fix footnote 3"));
        assert_eq!(with.subject, "Article Correction Required");
        assert!(with.html.contains("Comments: fix footnote 3"));

        let without = correction_request("Contract Law Basics", None);
        assert!(!without.html.contains("Comments:"));
    }

    #[test]
    fn submission_confirmation_carries_article_id() {
        let content = submission_received("Priya", "Contract Law Basics", "A1");
        assert_eq!(content.subject, "Article Received");
        assert!(content.html.contains("Article ID:</b> A1"));
    }

    #[test]
    fn welcome_links_to_the_portal() {
        let content = registration_welcome("Priya", "https://lawnation.example/law/home");
        assert!(content.subject.starts_with("Welcome to Law Nation!"));
        assert!(content.html.contains("https://lawnation.example/law/home"));
    }

    #[test]
    fn review_task_names_both_parties() {
        let content = review_task_assigned("Rahul", "Contract Law Basics", "Priya");
        assert_eq!(content.subject, "New Review Task Assigned");
        assert!(content.html.contains("Rahul"));
        assert!(content.html.contains("Priya"));
    }
}
