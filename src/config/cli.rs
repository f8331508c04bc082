use crate::domain::ports::Page;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// File-backed page: the template lives in one file, the mount point is
/// another file whose content is wholly replaced on each write.
#[derive(Debug, Clone)]
pub struct FilePage {
    template_path: String,
    mount_path: String,
}

impl FilePage {
    pub fn new(template_path: String, mount_path: String) -> Self {
        Self {
            template_path,
            mount_path,
        }
    }
}

impl Page for FilePage {
    fn template(&self) -> Result<String> {
        let markup = fs::read_to_string(Path::new(&self.template_path))?;
        Ok(markup)
    }

    fn replace(&mut self, markup: &str) -> Result<()> {
        let full_path = Path::new(&self.mount_path);

        if let Some(parent) = full_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(full_path, markup)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_template_and_replaces_mount_content() {
        let dir = TempDir::new().unwrap();
        let template_path = dir.path().join("template.html");
        let mount_path = dir.path().join("out/index.html");
        std::fs::write(&template_path, "<p>{{loggedIn}}</p>").unwrap();

        let mut page = FilePage::new(
            template_path.to_str().unwrap().to_string(),
            mount_path.to_str().unwrap().to_string(),
        );

        assert_eq!(page.template().unwrap(), "<p>{{loggedIn}}</p>");

        page.replace("first").unwrap();
        page.replace("second").unwrap();
        assert_eq!(std::fs::read_to_string(&mount_path).unwrap(), "second");
    }

    #[test]
    fn missing_template_is_an_error() {
        let page = FilePage::new("/nonexistent/template.html".to_string(), "out".to_string());
        assert!(page.template().is_err());
    }
}
