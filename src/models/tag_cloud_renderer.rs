use crate::config::DEFAULT_TAG_CLOUD_CONFIG;
use crate::models::{Error, Selection, TagCloudConfig};
use crate::types::{FontSize, WordFrequency};
use crate::utils::escape_html;
use std::io::Write;

/// Writes a `Selection` as an HTML tag cloud.
#[derive(Debug, Clone, Copy)]
pub struct TagCloudRenderer<'a> {
    config: &'a TagCloudConfig,
}

impl Default for TagCloudRenderer<'static> {
    fn default() -> Self {
        Self {
            config: DEFAULT_TAG_CLOUD_CONFIG,
        }
    }
}

impl<'a> TagCloudRenderer<'a> {
    pub fn new(config: &'a TagCloudConfig) -> Result<Self, Error> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Font size of a word with `count` occurrences, scaled linearly so that
    /// `min_count` maps to the minimum font and `max_count` to the maximum.
    ///
    /// Uses truncating integer division. When every selected word shares a
    /// count, the midpoint of the font range is used.
    pub fn font_size(
        &self,
        count: WordFrequency,
        min_count: WordFrequency,
        max_count: WordFrequency,
    ) -> FontSize {
        let min_font = self.config.min_font;
        let max_font = self.config.max_font;

        if max_count <= min_count {
            return min_font + (max_font - min_font) / 2;
        }

        let offset = count.clamp(min_count, max_count) - min_count;
        let font_range = (max_font - min_font) as u64;
        let scaled = offset as u64 * font_range / (max_count - min_count) as u64;

        min_font + scaled as FontSize
    }

    pub fn render<W: Write>(
        &self,
        selection: &Selection,
        source_name: &str,
        output: &mut W,
    ) -> Result<(), Error> {
        self.write_document(selection, source_name, output)
            .map_err(Error::WriteFailure)
    }

    pub fn render_to_string(&self, selection: &Selection, source_name: &str) -> Result<String, Error> {
        let mut buffer = Vec::new();
        self.render(selection, source_name, &mut buffer)?;

        String::from_utf8(buffer).map_err(|e| {
            Error::WriteFailure(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }

    fn write_document<W: Write>(
        &self,
        selection: &Selection,
        source_name: &str,
        output: &mut W,
    ) -> std::io::Result<()> {
        self.write_heading(selection.len(), source_name, output)?;

        for (word, count) in selection.iter() {
            let font = self.font_size(*count, selection.min_count(), selection.max_count());
            writeln!(
                output,
                "<span style=\"cursor:default\" class=\"f{}\" title=\"count: {}\">{}</span>",
                font,
                count,
                escape_html(word)
            )?;
        }

        writeln!(output, "</p>")?;
        writeln!(output, "</div>")?;
        writeln!(output, "</body>")?;
        writeln!(output, "</html>")?;

        Ok(())
    }

    fn write_heading<W: Write>(
        &self,
        tag_count: usize,
        source_name: &str,
        output: &mut W,
    ) -> std::io::Result<()> {
        let source_name = escape_html(source_name);

        writeln!(output, "<html>")?;
        writeln!(output, "<head>")?;
        writeln!(
            output,
            "<title>Top {} words in {}</title>",
            tag_count, source_name
        )?;
        writeln!(
            output,
            "<link href=\"{}\" rel=\"stylesheet\" type=\"text/css\">",
            self.config.stylesheet_url
        )?;
        writeln!(output, "</head>")?;
        writeln!(output, "<body>")?;
        writeln!(output, "<h2>Top {} words in {}</h2>", tag_count, source_name)?;
        writeln!(output, "<hr>")?;
        writeln!(output, "<div class=\"cdiv\">")?;
        writeln!(output, "<p class=\"cbox\">")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MAX_FONT, MIN_FONT};
    use crate::count_word_frequencies;

    #[test]
    fn test_font_size_bounds() {
        let renderer = TagCloudRenderer::default();

        assert_eq!(renderer.font_size(1, 1, 3), MIN_FONT);
        assert_eq!(renderer.font_size(3, 1, 3), MAX_FONT);
        assert_eq!(renderer.font_size(2, 1, 3), 29);
    }

    #[test]
    fn test_font_size_truncates() {
        let renderer = TagCloudRenderer::default();

        // 11 + 1 * 37 / 3 = 11 + 12
        assert_eq!(renderer.font_size(2, 1, 4), 23);
    }

    #[test]
    fn test_font_size_uniform_counts() {
        let renderer = TagCloudRenderer::default();

        assert_eq!(renderer.font_size(7, 7, 7), 29);
        assert_eq!(renderer.font_size(0, 0, 0), 29);
    }

    #[test]
    fn test_font_size_midpoint_with_large_fonts() {
        let config = TagCloudConfig {
            min_font: u32::MAX - 10,
            max_font: u32::MAX,
            stylesheet_url: "tagcloud.css",
        };
        let renderer = TagCloudRenderer::new(&config).unwrap();

        assert_eq!(renderer.font_size(4, 4, 4), u32::MAX - 5);
        assert_eq!(renderer.font_size(9, 1, 9), u32::MAX);
    }

    #[test]
    fn test_font_size_stays_in_range() {
        let renderer = TagCloudRenderer::default();

        for count in 5..=50 {
            let font = renderer.font_size(count, 5, 50);
            assert!((MIN_FONT..=MAX_FONT).contains(&font));
        }
    }

    #[test]
    fn test_custom_config() {
        let config = TagCloudConfig {
            min_font: 10,
            max_font: 20,
            stylesheet_url: "tagcloud.css",
        };
        let renderer = TagCloudRenderer::new(&config).unwrap();

        assert_eq!(renderer.font_size(1, 1, 2), 10);
        assert_eq!(renderer.font_size(2, 1, 2), 20);
        assert_eq!(renderer.font_size(1, 1, 1), 15);
    }

    #[test]
    fn test_inverted_config_is_rejected() {
        let config = TagCloudConfig {
            min_font: 48,
            max_font: 11,
            stylesheet_url: "tagcloud.css",
        };

        assert!(matches!(
            TagCloudRenderer::new(&config),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_render_tags() {
        let frequencies = count_word_frequencies(["the cat sat on the mat", "the cat ran"]);
        let selection = Selection::select_top(&frequencies, 3);
        let html = TagCloudRenderer::default()
            .render_to_string(&selection, "cat.txt")
            .unwrap();

        let spans: Vec<&str> = html.lines().filter(|line| line.starts_with("<span")).collect();
        assert_eq!(
            spans,
            vec![
                "<span style=\"cursor:default\" class=\"f29\" title=\"count: 2\">cat</span>",
                "<span style=\"cursor:default\" class=\"f11\" title=\"count: 1\">mat</span>",
                "<span style=\"cursor:default\" class=\"f48\" title=\"count: 3\">the</span>",
            ]
        );
        assert!(html.contains("<title>Top 3 words in cat.txt</title>"));
        assert!(html.ends_with("</p>\n</div>\n</body>\n</html>\n"));
    }

    #[test]
    fn test_render_empty_selection() {
        let html = TagCloudRenderer::default()
            .render_to_string(&Selection::default(), "empty.txt")
            .unwrap();

        assert!(html.contains("<h2>Top 0 words in empty.txt</h2>"));
        assert!(!html.contains("<span"));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_render_reports_write_failure() {
        let result =
            TagCloudRenderer::default().render(&Selection::default(), "any.txt", &mut FailingWriter);

        assert!(matches!(result, Err(Error::WriteFailure(_))));
    }

    #[test]
    fn test_render_escapes_source_name() {
        let html = TagCloudRenderer::default()
            .render_to_string(&Selection::default(), "a&b.txt")
            .unwrap();

        assert!(html.contains("<title>Top 0 words in a&amp;b.txt</title>"));
    }
}
