use std::io::Write;
use std::path::PathBuf;

use zip::write::SimpleFileOptions;

/// Writes a zip archive with the given `(entry name, body)` pairs into the
/// temp directory and returns its path. Each call gets a unique file.
pub fn write_package(entries: &[(&str, &str)]) -> PathBuf {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path =
        std::env::temp_dir().join(format!("qti2html_test_{}_{}.zip", std::process::id(), id));
    // Clean up leftover files from previous runs
    let _ = std::fs::remove_file(&path);
    let _ = std::fs::remove_file(qti2html::utils::output_path(&path));

    let file = std::fs::File::create(&path).expect("failed to create test archive");
    let mut zip = zip::ZipWriter::new(file);
    for (name, body) in entries {
        zip.start_file(*name, SimpleFileOptions::default())
            .expect("failed to start archive entry");
        zip.write_all(body.as_bytes())
            .expect("failed to write archive entry");
    }
    zip.finish().expect("failed to finish archive");
    path
}

/// Manifest with one resource element per `(identifier, file)` pair.
pub fn manifest_xml(resources: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (identifier, file) in resources {
        body.push_str(&format!(
            r#"    <resource identifier="{identifier}" type="assessment/x-bb-qti-test" bb:file="{file}" bb:title="Quiz {identifier}" xml:base="{identifier}"/>
"#
        ));
    }
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<manifest identifier="man1" xmlns:bb="http://www.blackboard.com/content-packaging/">
  <resources>
{body}  </resources>
</manifest>
"#
    )
}

/// Assessment file wrapping the given item elements.
pub fn assessment_xml(items: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<questestinterop>
  <assessment title="Test Assessment">
    <section ident="sec1">
{}    </section>
  </assessment>
</questestinterop>
"#,
        items.concat()
    )
}

/// One well-formed item: a plain-format question, `(text, ident)` choices,
/// and optionally a "correct"-titled condition naming an identifier.
pub fn item_xml(question: &str, choices: &[(&str, &str)], correct: Option<&str>) -> String {
    let mut labels = String::new();
    for (text, ident) in choices {
        labels.push_str(&format!(
            r#"              <flow_label>
                <response_label ident="{ident}">
                  <flow_mat>
                    <material>
                      <mat_extension>
                        <mat_formattedtext type="PLAIN_TEXT">{text}</mat_formattedtext>
                      </mat_extension>
                    </material>
                  </flow_mat>
                </response_label>
              </flow_label>
"#
        ));
    }

    let processing = match correct {
        Some(ident) => format!(
            r#"        <resprocessing>
          <respcondition title="incorrect">
            <conditionvar><other/></conditionvar>
          </respcondition>
          <respcondition title="correct">
            <conditionvar>
              <varequal respident="response">{ident}</varequal>
            </conditionvar>
          </respcondition>
        </resprocessing>
"#
        ),
        None => String::new(),
    };

    format!(
        r#"      <item ident="itm1" title="Question">
        <presentation>
          <flow>
            <flow class="QUESTION_BLOCK">
              <flow class="FORMATTED_TEXT_BLOCK">
                <material>
                  <mat_extension>
                    <mat_formattedtext type="PLAIN_TEXT">{question}</mat_formattedtext>
                  </mat_extension>
                </material>
              </flow>
            </flow>
            <flow class="RESPONSE_BLOCK">
              <response_lid ident="response">
                <render_choice>
{labels}                </render_choice>
              </response_lid>
            </flow>
          </flow>
        </presentation>
{processing}      </item>
"#
    )
}

/// An item whose presentation carries no question block at all.
pub fn item_without_question_xml() -> String {
    r#"      <item ident="broken" title="Broken">
        <presentation>
          <flow>
            <flow class="RESPONSE_BLOCK">
              <response_lid ident="response">
                <render_choice>
                  <flow_label>
                    <response_label ident="x1">
                      <flow_mat>
                        <material>
                          <mat_extension>
                            <mat_formattedtext type="PLAIN_TEXT">Orphan</mat_formattedtext>
                          </mat_extension>
                        </material>
                      </flow_mat>
                    </response_label>
                  </flow_label>
                </render_choice>
              </response_lid>
            </flow>
          </flow>
        </presentation>
      </item>
"#
    .to_owned()
}
