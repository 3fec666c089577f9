//! Emission of the standalone viewer document.
//!
//! The document is a fixed HTML page embedding the Trimble Connect Workspace
//! viewer, configured by substituting four unique marker substrings. The
//! substitution is literal string replacement, kept bit-exact with the
//! established output format; input values must not contain the markers
//! themselves.

const ACCESS_TOKEN_MARKER: &str = "__ACCESS_TOKEN__";
const PROJECT_ID_MARKER: &str = "__PROJECT_ID__";
const MODEL_ID_MARKER: &str = "__MODEL_ID__";
const VERSION_ID_MARKER: &str = "__VERSION_ID__";

const VIEWER_HTML_TEMPLATE: &str = r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8" />
    <title>Trimble Connect Viewer</title>
    <style>
      html, body {
        margin: 0;
        padding: 0;
        height: 100%;
        width: 100%;
        overflow: hidden;
      }
      #tc-viewer {
        border: 0;
        width: 100%;
        height: 100%;
      }
    </style>
    <script src="https://components.connect.trimble.com/trimble-connect-workspace-api/index.js"></script>
  </head>
  <body>
    <iframe
      id="tc-viewer"
      src="about:blank"
      allowfullscreen
    ></iframe>

    <script>
      const ACCESS_TOKEN = "__ACCESS_TOKEN__";
      const PROJECT_ID   = "__PROJECT_ID__";
      const MODEL_ID     = "__MODEL_ID__";
      const VERSION_ID   = "__VERSION_ID__";

      (async function () {
        try {
          const iframe = document.getElementById("tc-viewer");

          // Get Trimble's embedded app URL
          iframe.src = TrimbleConnectWorkspace.getConnectEmbedUrl();

          // Connect Workspace API to the iframe
          const api = await TrimbleConnectWorkspace.connect(
            iframe,
            function (event, data) {
              console.log("TC event:", event, data);
            },
            30000
          );

          // Pass the OAuth access token
          await api.embed.setTokens({
            accessToken: ACCESS_TOKEN
          });

          // Configure which project/model to open
          const config = {
            projectId: PROJECT_ID,
            modelId: MODEL_ID
          };

          if (VERSION_ID) {
            config.versionId = VERSION_ID;
          }

          // Start 3D viewer
          await api.embed.init3DViewer(config);
        } catch (e) {
          console.error("Error initializing Trimble viewer:", e);
          alert("Failed to initialize Trimble Connect viewer. Check console.");
        }
      })();
    </script>
  </body>
</html>
"#;

/// Build a complete HTML document that opens a model in the embedded viewer.
///
/// `version_id` is optional; when absent the viewer opens the model's latest
/// version.
pub fn build_viewer_html(
    access_token: &str,
    project_id: &str,
    model_id: &str,
    version_id: Option<&str>,
) -> String {
    VIEWER_HTML_TEMPLATE
        .replace(ACCESS_TOKEN_MARKER, access_token)
        .replace(PROJECT_ID_MARKER, project_id)
        .replace(MODEL_ID_MARKER, model_id)
        .replace(VERSION_ID_MARKER, version_id.unwrap_or(""))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_markers_each_appear_once_in_template() {
        for marker in [
            ACCESS_TOKEN_MARKER,
            PROJECT_ID_MARKER,
            MODEL_ID_MARKER,
            VERSION_ID_MARKER,
        ] {
            assert_eq!(VIEWER_HTML_TEMPLATE.matches(marker).count(), 1);
        }
    }

    #[test]
    fn test_all_markers_substituted() {
        let html = build_viewer_html("T", "P", "M", None);
        assert!(html.contains(r#"const ACCESS_TOKEN = "T";"#));
        assert!(html.contains(r#"const PROJECT_ID   = "P";"#));
        assert!(html.contains(r#"const MODEL_ID     = "M";"#));
        assert!(!html.contains("__ACCESS_TOKEN__"));
        assert!(!html.contains("__PROJECT_ID__"));
        assert!(!html.contains("__MODEL_ID__"));
        assert!(!html.contains("__VERSION_ID__"));
    }

    #[test]
    fn test_missing_version_becomes_empty_string() {
        let html = build_viewer_html("T", "P", "M", None);
        assert!(html.contains(r#"const VERSION_ID   = "";"#));
    }

    #[test]
    fn test_version_is_substituted_when_given() {
        let html = build_viewer_html("T", "P", "M", Some("v7"));
        assert!(html.contains(r#"const VERSION_ID   = "v7";"#));
    }
}
