//! Runtime asset-lookup helper injected into the bundled script.
//!
//! The helper is prepended as plain text to the bundle when assets were
//! staged. Inside the generated program it installs itself at most once per
//! process and resolves asset filenames against an ordered candidate list,
//! first match wins.

use crate::pack::error::{ErrorExt, Result};
use handlebars::Handlebars;
use std::path::Path;

/// Process-global flag guarding one-time installation inside the generated
/// program.
const INSTALL_FLAG: &str = "__nodepack_asset_helper_installed";

/// Root where the packager mounts the embedded snapshot at runtime.
const SNAPSHOT_ROOT: &str = "/snapshot";

/// Candidate order: beside the executable, under the working directory,
/// inside the snapshot mount, beside the bundle source during development.
const HELPER_TEMPLATE: &str = r#"(function () {
  if (global.{{install_flag}}) { return; }
  global.{{install_flag}} = true;
  var fs = require('fs');
  var path = require('path');
  var candidates = [
    function () { return path.join(path.dirname(process.execPath), 'assets'); },
    function () { return path.join(process.cwd(), 'assets'); },
    function () { return path.join('{{snapshot_root}}', 'assets'); },
    function () { return path.join(__dirname, 'assets'); }
  ];
  global.resolveAsset = function (name) {
    for (var i = 0; i < candidates.length; i++) {
      var candidate = path.join(candidates[i](), name);
      if (fs.existsSync(candidate)) { return candidate; }
    }
    throw new Error('asset not found: ' + name);
  };
})();
"#;

/// Renders the helper script.
pub(crate) fn render_asset_helper() -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);

    let data = serde_json::json!({
        "install_flag": INSTALL_FLAG,
        "snapshot_root": SNAPSHOT_ROOT,
    });

    Ok(handlebars.render_template(HELPER_TEMPLATE, &data)?)
}

/// Prepends the rendered helper to the bundled script.
pub(crate) async fn inject_asset_helper(bundle: &Path) -> Result<()> {
    let script = tokio::fs::read_to_string(bundle)
        .await
        .fs_context("reading bundled script", bundle)?;
    let helper = render_asset_helper()?;
    tokio::fs::write(bundle, format!("{}{}", helper, script))
        .await
        .fs_context("writing bundled script", bundle)?;
    Ok(())
}
