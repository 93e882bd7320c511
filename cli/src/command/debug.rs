use clap::Args;
use rpub::Epub;
use rpub::epub::EpubSettings;
use rpub::errors::EpubResult;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DebugCommand {
    /// An EPUB file or directory containing the contents of an unzipped EPUB
    pub ebook_path: PathBuf,

    /// Fail if the navigation document is referenced although invalid
    #[arg(long)]
    strict: bool,

    /// Display the container (rootfiles)
    #[arg(long)]
    container: bool,

    /// Display the package document
    #[arg(long)]
    opf: bool,

    /// Display the navigation document
    #[arg(long)]
    navigation: bool,

    /// Display the encryption metadata
    #[arg(long)]
    encryption: bool,

    /// Display the license metadata
    #[arg(long)]
    license: bool,
}

impl DebugCommand {
    pub fn debug(&self) -> EpubResult<()> {
        // If any boolean arguments are set, only load the selected optional documents
        let selected = self.has_selected_components();
        let settings = EpubSettings::builder()
            .strict(self.strict)
            .load_encryption(!selected || self.encryption)
            .load_license(!selected || self.license);

        let epub = Epub::open_with(&self.ebook_path, settings)?;
        self.show_debug(&epub);

        Ok(())
    }

    pub fn has_selected_components(&self) -> bool {
        self.container || self.opf || self.navigation || self.encryption || self.license
    }

    pub fn show_debug(&self, epub: &Epub) {
        if !self.has_selected_components() {
            println!("{epub:#?}");
            return;
        }

        let debug_structs: &[(bool, &dyn std::fmt::Debug)] = &[
            (self.container, epub.container()),
            (self.opf, epub.opf()),
            (self.navigation, epub.navigation()),
            (self.encryption, epub.encryption()),
            (self.license, epub.license()),
        ];

        for (is_print, debug_struct) in debug_structs {
            if *is_print {
                println!("{debug_struct:#?}");
            }
        }
    }
}
