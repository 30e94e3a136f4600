//! Article record extraction from metadata XML.

use quick_xml::Reader;
use quick_xml::events::Event;

/// Keyword-bearing fields of one `PubmedArticle` element.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct ArticleRecord {
    /// MeSH `DescriptorName` texts, in document order.
    pub descriptors: Vec<String>,
    /// Author `Keyword` texts, in document order.
    pub keywords: Vec<String>,
}

/// Collects the descriptor and keyword texts of every article in `xml`.
///
/// Both element kinds are picked up at any depth inside their article, so
/// schema revisions that move them around do not break extraction. Elements
/// without text contribute nothing.
///
/// # Errors
///
/// Returns the underlying reader error when the document is not well formed
/// or article text carries an unresolvable entity reference.
pub(crate) fn parse_article_records(xml: &str) -> Result<Vec<ArticleRecord>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut records = Vec::new();
    let mut current_article: Option<ArticleRecord> = None;
    let mut current_element = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if name == "PubmedArticle" {
                    current_article = Some(ArticleRecord::default());
                }
                current_element = name;
            }
            Event::End(e) => {
                if e.name().as_ref() == b"PubmedArticle" {
                    if let Some(record) = current_article.take() {
                        records.push(record);
                    }
                }
                // Tail text between elements belongs to no field
                current_element.clear();
            }
            Event::Text(e) => {
                let Some(record) = current_article.as_mut() else {
                    continue;
                };
                let text = e.unescape()?.trim().to_string();
                if text.is_empty() {
                    continue;
                }
                match current_element.as_str() {
                    "DescriptorName" => record.descriptors.push(text),
                    "Keyword" => record.keywords.push(text),
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(records)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extracts_descriptors_and_keywords_per_article() {
        let xml = r"
            <PubmedArticleSet>
                <PubmedArticle>
                    <MedlineCitation>
                        <MeshHeadingList>
                            <MeshHeading>
                                <DescriptorName MajorTopicYN='N'>Arthritis, Rheumatoid</DescriptorName>
                            </MeshHeading>
                            <MeshHeading>
                                <DescriptorName MajorTopicYN='Y'>Humans</DescriptorName>
                            </MeshHeading>
                        </MeshHeadingList>
                        <KeywordList>
                            <Keyword MajorTopicYN='N'>biologics</Keyword>
                        </KeywordList>
                    </MedlineCitation>
                </PubmedArticle>
                <PubmedArticle>
                    <MedlineCitation>
                        <KeywordList>
                            <Keyword>bone pain</Keyword>
                        </KeywordList>
                    </MedlineCitation>
                </PubmedArticle>
            </PubmedArticleSet>
        ";

        let records = parse_article_records(xml).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].descriptors, vec!["Arthritis, Rheumatoid", "Humans"]);
        assert_eq!(records[0].keywords, vec!["biologics"]);
        assert!(records[1].descriptors.is_empty());
        assert_eq!(records[1].keywords, vec!["bone pain"]);
    }

    #[test]
    fn test_parse_picks_up_fields_at_any_depth() {
        let xml = r"
            <PubmedArticleSet>
                <PubmedArticle>
                    <Extra><Nested><DescriptorName>Lupus</DescriptorName></Nested></Extra>
                </PubmedArticle>
            </PubmedArticleSet>
        ";

        let records = parse_article_records(xml).unwrap();

        assert_eq!(records[0].descriptors, vec!["Lupus"]);
    }

    #[test]
    fn test_parse_empty_article_set_yields_no_records() {
        let records = parse_article_records("<PubmedArticleSet></PubmedArticleSet>").unwrap();

        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_unescapes_entities() {
        let xml = r"
            <PubmedArticleSet>
                <PubmedArticle>
                    <KeywordList><Keyword>pain &amp; fatigue</Keyword></KeywordList>
                </PubmedArticle>
            </PubmedArticleSet>
        ";

        let records = parse_article_records(xml).unwrap();

        assert_eq!(records[0].keywords, vec!["pain & fatigue"]);
    }

    #[test]
    fn test_parse_undefined_entity_is_an_error() {
        let xml = r"
            <PubmedArticleSet>
                <PubmedArticle>
                    <KeywordList>
                        <Keyword>pain &bogus; fatigue</Keyword>
                        <Keyword>gout</Keyword>
                    </KeywordList>
                </PubmedArticle>
            </PubmedArticleSet>
        ";

        let result = parse_article_records(xml);

        assert!(result.is_err(), "Expected Err, got: {result:?}");
    }

    #[test]
    fn test_parse_self_closed_keyword_contributes_nothing() {
        let xml = r"
            <PubmedArticleSet>
                <PubmedArticle>
                    <KeywordList><Keyword/><Keyword>uveitis</Keyword></KeywordList>
                </PubmedArticle>
            </PubmedArticleSet>
        ";

        let records = parse_article_records(xml).unwrap();

        assert_eq!(records[0].keywords, vec!["uveitis"]);
    }

    #[test]
    fn test_parse_ignores_text_outside_tracked_elements() {
        let xml = r"
            <PubmedArticleSet>
                <PubmedArticle>
                    <ArticleTitle>A title that is not a keyword</ArticleTitle>
                    <KeywordList><Keyword>gout</Keyword></KeywordList>
                </PubmedArticle>
            </PubmedArticleSet>
        ";

        let records = parse_article_records(xml).unwrap();

        assert!(records[0].descriptors.is_empty());
        assert_eq!(records[0].keywords, vec!["gout"]);
    }

    #[test]
    fn test_parse_text_outside_any_article_is_dropped() {
        let xml = "<PubmedArticleSet><Count>12</Count></PubmedArticleSet>";

        let records = parse_article_records(xml).unwrap();

        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_mismatched_end_tag_is_an_error() {
        let result = parse_article_records("<PubmedArticleSet><PubmedArticle></Wrong>");

        assert!(result.is_err(), "Expected Err, got: {result:?}");
    }

    #[test]
    fn test_parse_declaration_and_doctype_are_tolerated() {
        let xml = "<?xml version=\"1.0\" ?>\n<!DOCTYPE PubmedArticleSet>\n\
                   <PubmedArticleSet><PubmedArticle>\
                   <KeywordList><Keyword>lupus nephritis</Keyword></KeywordList>\
                   </PubmedArticle></PubmedArticleSet>";

        let records = parse_article_records(xml).unwrap();

        assert_eq!(records[0].keywords, vec!["lupus nephritis"]);
    }
}
