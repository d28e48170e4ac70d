use maud::{html, Markup, DOCTYPE};

/// Standalone error page. Kept free of the site layout so it renders
/// even when nothing else can.
pub fn error_page(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                link rel="stylesheet" href="/static/main.css";
            }
            body class="error-page" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to home" } }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_message() {
        let page = error_page(400, "<script>").into_string();
        assert!(page.contains("Error 400"));
        assert!(page.contains("&lt;script&gt;"));
    }
}
