/// Production origin. Canonical URLs, the sitemap and structured data always use this.
pub const SITE_URL: &str = "https://sathigroup.ai";
pub const SITE_NAME: &str = "Sathi Group";
pub const SITE_DOMAIN: &str = "sathigroup.ai";
pub const CONTACT_EMAIL: &str = "kate@sathigroup.ai";
pub const BOOKING_URL: &str = "https://app.lemcal.com/@johann";
pub const OG_IMAGE_PATH: &str = "/og-image.png";
pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;
pub const LOCALE: &str = "en_US";

pub fn absolute_url(path: &str) -> String {
    if path == "/" {
        SITE_URL.to_string()
    } else {
        format!("{}{}", SITE_URL, path)
    }
}

pub fn og_image_url() -> String {
    absolute_url(OG_IMAGE_PATH)
}
