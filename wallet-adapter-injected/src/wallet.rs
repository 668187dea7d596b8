use wallet_adapter_common::{InjectedProvider, Notification, SignMessageShape, SigningApi};

/// Static description of one browser wallet extension.
pub trait InjectedWallet: std::fmt::Debug + Clone + 'static {
    fn name(&self) -> String;
    fn url(&self) -> String;
    fn icon(&self) -> String;

    /// Property of the global object the extension injects itself as.
    fn namespace(&self) -> &'static str;

    /// Vendor marker that distinguishes this wallet from others sharing the
    /// namespace. `None` means presence alone is enough.
    fn marker_flag(&self) -> Option<&'static str>;

    fn is_correct_wallet(&self, provider: &dyn InjectedProvider) -> bool {
        match self.marker_flag() {
            Some(flag) => provider.flag(flag),
            None => true,
        }
    }

    /// What the provider's native `signMessage` resolves to.
    fn sign_message_shape(&self) -> SignMessageShape {
        SignMessageShape::Structured
    }

    /// Whether transactions go through the provider's own sign methods or
    /// through `request(method, params)`.
    fn signing_api(&self) -> SigningApi {
        SigningApi::Native
    }

    /// Legacy web wallets pick their signing endpoint from the network.
    fn requires_network(&self) -> bool {
        false
    }

    fn install_notification(&self) -> Notification {
        Notification::error(format!("{} Extension Error", self.name())).with_description(format!(
            "Please install the {} Extension for Chrome and then reload this page.",
            self.name()
        ))
    }
}
