macro_rules! handle_transparent {
    ($name:ident) => {
        #[derive(Copy, Clone, Debug, Eq, PartialEq)]
        #[repr(transparent)]
        pub struct $name(pub *mut u8);

        impl $name {
            #[allow(dead_code)]
            pub const fn none() -> Self {
                Self(std::ptr::null_mut())
            }

            #[allow(dead_code)]
            pub fn is_none(self) -> bool {
                self.0.is_null()
            }
        }

        impl crate::dispatch::ReturnValue for $name {
            fn failed(&self) -> bool {
                self.is_none()
            }
        }
    };
}

/// Declares a table of native commands.
///
/// Every entry lists the names under which the command may be exported, in
/// order of preference. The generated wrapper calls the first one that was
/// resolved, logs the call if configured, and runs the table's
/// `check_error` unless the entry is marked `unchecked`.
macro_rules! commands {
    (
        $(#[$attr:meta])*
        pub struct $table:ident {
            $(
                $(#[$cattr:meta])*
                fn $name:ident($($arg:ident: $ty:ty),* $(,)?) -> $ret:ty
                    = [$($sym:literal),+ $(,)?] $($unchecked:ident)?;
            )*
        }
    ) => {
        $(#[$attr])*
        pub struct $table {
            config: crate::config::GlConfig,
            $(
                $name: crate::dispatch::Command<unsafe extern "system" fn($($ty),*) -> $ret>,
            )*
        }

        #[allow(dead_code)]
        impl $table {
            pub fn load(
                loader: &mut dyn crate::loader::ProcLoader,
                config: crate::config::GlConfig,
            ) -> Self {
                let table = Self {
                    config,
                    $(
                        $name: crate::dispatch::Command::resolve(&[$($sym),+], loader),
                    )*
                };
                log::debug!(
                    "{}: resolved {} of {} commands",
                    stringify!($table),
                    table.commands().iter().filter(|c| c.selected.is_some()).count(),
                    table.commands().len(),
                );
                table
            }

            pub fn config(&self) -> &crate::config::GlConfig {
                &self.config
            }

            /// Resolution status of every command in declaration order.
            pub fn commands(&self) -> Vec<crate::dispatch::CommandStatus> {
                vec![$(self.$name.status(stringify!($name)),)*]
            }

            $(
                $(#[$cattr])*
                pub unsafe fn $name(&self, $($arg: $ty),*) -> Result<$ret, crate::error::GlError> {
                    let (sym, f) = self.$name.get()?;
                    let res = unsafe { f($($arg),*) };
                    if self.config.log_calls {
                        crate::dispatch::log_call(sym, &[$(&$arg as &dyn std::fmt::Debug),*], &res);
                    }
                    if commands!(@checked $($unchecked)?) {
                        self.check_error(sym, &res)?;
                    }
                    Ok(res)
                }
            )*
        }
    };
    (@checked unchecked) => {
        false
    };
    (@checked) => {
        true
    };
}
