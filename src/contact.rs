use crate::config::{BOOKING_URL, CONTACT_EMAIL};

/// A pre-filled email opened in the visitor's mail client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Inquiry {
    pub subject: &'static str,
    pub body: &'static str,
}

pub const GENERAL_INQUIRY: Inquiry = Inquiry {
    subject: "AI Automation Inquiry",
    body: "Hi Kate,\n\nI'm interested in learning more about Sathi Group's AI automation services.\n\n",
};

pub const BUSINESS_CONSULTATION: Inquiry = Inquiry {
    subject: "Business Automation Consultation",
    body: "Hi Kate,\n\nI'm interested in learning more about how you can help automate my business operations.\n\nMy business: \nBest time to call: \n\nThanks!",
};

pub const ALL_INQUIRIES: [Inquiry; 2] = [GENERAL_INQUIRY, BUSINESS_CONSULTATION];

impl Inquiry {
    pub fn href(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            CONTACT_EMAIL,
            urlencoding::encode(self.subject),
            urlencoding::encode(self.body)
        )
    }
}

/// Where a call-to-action sends the visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactChannel {
    Email(Inquiry),
    Booking,
}

impl ContactChannel {
    pub fn href(&self) -> String {
        match self {
            ContactChannel::Email(inquiry) => inquiry.href(),
            ContactChannel::Booking => BOOKING_URL.to_string(),
        }
    }
}

#[cfg(test)]
pub(crate) fn query_param(href: &str, name: &str) -> Option<String> {
    let (_, query) = href.split_once('?')?;
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key != name {
            return None;
        }
        urlencoding::decode(value).ok().map(|v| v.into_owned())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_inquiry_has_a_subject() {
        for inquiry in ALL_INQUIRIES {
            let href = inquiry.href();
            assert!(href.starts_with("mailto:kate@sathigroup.ai?"));
            let subject = query_param(&href, "subject").expect("subject parameter");
            assert!(!subject.trim().is_empty());
            assert_eq!(subject, inquiry.subject);
        }
    }

    #[test]
    fn body_survives_encoding() {
        let href = BUSINESS_CONSULTATION.href();
        assert!(!href.contains(' '));
        assert!(!href.contains('\n'));
        let body = query_param(&href, "body").expect("body parameter");
        assert_eq!(body, BUSINESS_CONSULTATION.body);
    }

    #[test]
    fn booking_channel_is_external() {
        assert_eq!(ContactChannel::Booking.href(), "https://app.lemcal.com/@johann");
        assert!(ContactChannel::Email(GENERAL_INQUIRY)
            .href()
            .starts_with("mailto:"));
    }
}
