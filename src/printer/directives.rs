//! Preprocessor and pragma primitives.

use clangprint_core::lang::conventions::{CXX17_EXTENSIONS_DIAGNOSTIC, INLINE_THUNK_ATTRIBUTE, SHIM_HEADER_DIR};

use super::SyntaxPrinter;

/// Support header roots, relative to clang's resource `include` directory.
const RESOURCE_DIR_ROOT: &str = "../../../swift/";
const LOCAL_PREFIX_ROOT: &str = "../../../../../lib/swift/";

impl SyntaxPrinter<'_> {
    /// `#define <name>`
    pub fn print_define(&mut self, name: &str) {
        self.out.write(&format!("#define {name}\n"));
    }

    /// `inline __attribute__((always_inline)) `
    pub fn print_inline_for_thunk(&mut self) {
        self.out.write(INLINE_THUNK_ATTRIBUTE);
        self.out.write(" ");
    }

    /// Silence clang warning `-W<diagnostic>` for `body`.
    pub fn print_ignored_diagnostic_block(&mut self, diagnostic: &str, body: impl FnOnce(&mut Self)) {
        self.out.write("#pragma clang diagnostic push\n");
        self.out.write(&format!("#pragma clang diagnostic ignored \"-W{diagnostic}\"\n"));
        body(self);
        self.out.write("#pragma clang diagnostic pop\n");
    }

    pub fn print_ignored_cxx17_extension_diagnostic_block(&mut self, body: impl FnOnce(&mut Self)) {
        self.print_ignored_diagnostic_block(CXX17_EXTENSIONS_DIAGNOSTIC, body);
    }

    /// Include `header` from the interop support directory, trying the toolchain layouts in order.
    ///
    /// When no layout has the header nothing is included.
    pub fn print_include_for_shim_header(&mut self, header: &str) {
        let resource_dir = format!("{RESOURCE_DIR_ROOT}{SHIM_HEADER_DIR}/{header}");
        let local_prefix = format!("{LOCAL_PREFIX_ROOT}{SHIM_HEADER_DIR}/{header}");
        let include_path = format!("{SHIM_HEADER_DIR}/{header}");

        self.out.write("// Look for the C++ interop support header relative to clang's resource dir:\n");
        self.out.write("//  '<toolchain>/usr/lib/clang/<version>/include/../../../swift/swiftToCxx'.\n");
        self.out.write(&format!("#if __has_include(<{resource_dir}>)\n"));
        self.out.write(&format!("#include <{resource_dir}>\n"));
        self.out.write(&format!("#elif __has_include(<{local_prefix}>)\n"));
        self.out.write(
            "//  '<toolchain>/usr/local/lib/clang/<version>/include/../../../../../lib/swift/swiftToCxx'.\n",
        );
        self.out.write(&format!("#include <{local_prefix}>\n"));
        self.out.write(
            "// Alternatively, allow user to find the header using additional include path into '<toolchain>/lib/swift'.\n",
        );
        self.out.write(&format!("#elif __has_include(<{include_path}>)\n"));
        self.out.write(&format!("#include <{include_path}>\n"));
        self.out.write("#endif\n");
    }
}
