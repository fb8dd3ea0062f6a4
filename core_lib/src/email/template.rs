//! HTML rendering for the offer form notification
//!
//! Every value that came from the form goes through `html_escape` before it is
//! placed in the document.

use crate::models::LeadSubmission;
use html_escape::{encode_double_quoted_attribute, encode_text};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref URL_SCHEME: Regex = Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*:").unwrap();
}

pub const OFFER_FORM_TITLE: &str = "New Customer Sign Up";

const PRIMARY: &str = "#3874d8";
const SECONDARY: &str = "#63a0ff";
const SUCCESS: &str = "#5ad840";
const TEXT_DARK: &str = "#333333";
const TEXT_LIGHT: &str = "#888888";
const BACKGROUND: &str = "#f5f5f5";
const WHITE: &str = "#ffffff";

pub fn offer_form_subject(company_name: &str) -> String {
    format!("{} from Hotel Council has signed up", company_name)
}

pub fn render_offer_form_email(lead: &LeadSubmission, year: i32) -> String {
    let website_line = lead
        .company_website()
        .map(|website| {
            if is_safe_link(website) {
                format!(
                    r#"<p><strong>Website:</strong> <a href="{href}" style="color: {SECONDARY};">{text}</a></p>"#,
                    href = encode_double_quoted_attribute(website),
                    text = encode_text(website),
                )
            } else {
                format!("<p><strong>Website:</strong> {}</p>", encode_text(website))
            }
        })
        .unwrap_or_default();

    let main_content = format!(
        r#"
        <p>A new customer has submitted the offer form from Hotel Council.</p>
        <h2>Contact Information</h2>
        <p><strong>Name:</strong> {first_name} {last_name}</p>
        <p><strong>Company:</strong> {company}</p>
        {website_line}
        <p><strong>Email:</strong> <a href="mailto:{email_href}" style="color: {SECONDARY};">{email}</a></p>
        <p><strong>Phone:</strong> {phone}</p>

        <h2>Property Description</h2>
        <p style="background-color: rgba(56, 116, 216, 0.1); padding: 16px; border-radius: 6px; border-left: 3px solid {PRIMARY};">
          {description}
        </p>"#,
        first_name = encode_text(lead.first_name()),
        last_name = encode_text(lead.last_name()),
        company = encode_text(lead.company_name()),
        email_href = encode_double_quoted_attribute(lead.email_address()),
        email = encode_text(lead.email_address()),
        phone = encode_text(lead.phone_number()),
        description = encode_text(lead.property_description()),
    );

    render_layout(OFFER_FORM_TITLE, &main_content, year)
}

/// Only http(s) or scheme-less websites become links. Mail clients drop tabs and
/// newlines inside `href`, so they are removed before the scheme is read.
fn is_safe_link(website: &str) -> bool {
    let cleaned: String = website
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();
    let cleaned = cleaned.trim_start_matches(|c: char| c.is_ascii_control() || c == ' ');

    match URL_SCHEME.find(cleaned) {
        Some(scheme) => {
            let scheme = scheme.as_str().to_ascii_lowercase();
            scheme == "http:" || scheme == "https:"
        }
        None => true,
    }
}

fn render_layout(title: &str, main_content: &str, year: i32) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
      body {{
        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen-Sans, Ubuntu, Cantarell, 'Helvetica Neue', sans-serif;
        line-height: 1.6;
        color: {TEXT_DARK};
        background-color: {SUCCESS};
        margin: 0;
        padding: 0;
      }}
      .container {{
        max-width: 600px;
        margin: 0 auto;
        background-color: {WHITE};
        border-radius: 8px;
        overflow: hidden;
        box-shadow: 0 2px 8px rgba(0, 0, 0, 0.05);
      }}
      .header {{
        background-color: {PRIMARY};
        padding: 24px;
        text-align: center;
      }}
      .header h1 {{
        color: {WHITE};
        margin: 0;
        font-weight: 600;
        font-size: 24px;
      }}
      .content {{
        padding: 24px;
        background-color: {WHITE};
      }}
      .content h2 {{
        color: {PRIMARY};
        font-size: 20px;
        margin-top: 0;
        margin-bottom: 16px;
      }}
      .content p {{
        margin-bottom: 16px;
        color: {TEXT_DARK};
      }}
      .footer {{
        padding: 20px 24px;
        background-color: {BACKGROUND};
        text-align: center;
        color: {TEXT_LIGHT};
        font-size: 14px;
        border-top: 1px solid #e1e1e1;
      }}
    </style>
  </head>
  <body>
    <div class="container">
      <div class="header">
        <h1>{title}</h1>
      </div>
      <div class="content">
        {main_content}
      </div>
      <div class="footer">
        <p>This is an automated notification from GuestOS. Please do not reply to this email.</p>
        <p>&copy; {year} GuestOS. All rights reserved.</p>
      </div>
    </div>
  </body>
</html>
"#
    )
}
