use std::str::FromStr;
use std::sync::Mutex;

use serde::Serialize;
use solana_sdk::{pubkey::Pubkey, transaction::Transaction};
use wallet_adapter_common::{
    ConnectOptions, InjectedProvider, ProviderError, ProviderEventKind, ProviderListener,
    SignedMessage, SigningApi,
};
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};

use crate::signing::{self, SignAllTransactionsResponse, SignTransactionResponse};
use crate::util::{function, js_error, js_to_json, property};

type EventClosure = Closure<dyn FnMut(JsValue, JsValue)>;

/// An extension object found on `window`, driven through reflection.
pub struct JsInjectedProvider {
    namespace: String,
    object: JsValue,
    signing_api: Mutex<SigningApi>,
    // the extension only holds references to these
    closures: Mutex<Vec<EventClosure>>,
}

impl std::fmt::Debug for JsInjectedProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsInjectedProvider")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}

fn pubkey_from_js(value: &JsValue) -> Option<Pubkey> {
    if let Some(encoded) = value.as_string() {
        return Pubkey::from_str(&encoded).ok();
    }

    if let Some(to_bytes) = function(value, "toBytes") {
        let bytes = to_bytes.call0(value).ok()?;
        let bytes = js_sys::Uint8Array::new(&bytes).to_vec();
        return Pubkey::try_from(bytes.as_slice()).ok();
    }

    js_to_json(value).as_str().and_then(|s| Pubkey::from_str(s).ok())
}

impl JsInjectedProvider {
    pub fn new(namespace: impl ToString, object: JsValue) -> Self {
        Self {
            namespace: namespace.to_string(),
            object,
            signing_api: Mutex::new(SigningApi::default()),
            closures: Mutex::new(Vec::new()),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Whether this wraps exactly `object`.
    pub fn wraps(&self, object: &JsValue) -> bool {
        js_sys::Object::is(&self.object, object)
    }

    fn method(&self, name: &'static str) -> Result<js_sys::Function, ProviderError> {
        function(&self.object, name).ok_or(ProviderError::MethodMissing(name))
    }

    /// Calls `name` and awaits the result, whether or not it is a promise.
    async fn call(&self, name: &'static str, args: &[JsValue]) -> Result<JsValue, ProviderError> {
        let method = self.method(name)?;
        let args: js_sys::Array = args.iter().collect();

        tracing::debug!("{}.{name}()", self.namespace);

        let returned = js_sys::Reflect::apply(&method, &self.object, &args).map_err(js_error)?;
        let promise = js_sys::Promise::resolve(&returned);

        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map_err(js_error)
    }

    fn route(&self, native_method: &'static str) -> Result<SigningApi, ProviderError> {
        let preferred = *self
            .signing_api
            .lock()
            .map_err(|err| ProviderError::Native(err.to_string()))?;

        signing::signing_route(
            preferred,
            function(&self.object, "request").is_some(),
            function(&self.object, native_method).is_some(),
            native_method,
        )
    }

    /// `request(method, params)`, the way Huobi and Sollet take sign calls.
    async fn request<P: Serialize, R: serde::de::DeserializeOwned>(
        &self,
        request: &signing::SignRequest<P>,
    ) -> Result<R, ProviderError> {
        let params = serde_wasm_bindgen::to_value(&request.params)
            .map_err(|err| ProviderError::Native(err.to_string()))?;

        let response = self
            .call("request", &[JsValue::from_str(request.method), params])
            .await?;

        serde_wasm_bindgen::from_value(response).map_err(|err| {
            ProviderError::Native(format!("unexpected {} response: {err}", request.method))
        })
    }

    async fn sign_natively(&self, transaction: Transaction) -> Result<Transaction, ProviderError> {
        let bytes = signing::serialize_transaction(&transaction)?;
        let signed = self
            .call("signTransaction", &[js_sys::Uint8Array::from(bytes.as_slice()).into()])
            .await?;

        signing::deserialize_signed(&transaction, &transaction_bytes(&signed)?)
    }

    async fn sign_all_natively(
        &self,
        transactions: Vec<Transaction>,
    ) -> Result<Vec<Transaction>, ProviderError> {
        let payload = js_sys::Array::new();
        for transaction in &transactions {
            let bytes = signing::serialize_transaction(transaction)?;
            payload.push(&js_sys::Uint8Array::from(bytes.as_slice()));
        }

        let signed = self.call("signAllTransactions", &[payload.into()]).await?;
        let signed = js_sys::Array::from(&signed);
        if signed.length() as usize != transactions.len() {
            return Err(ProviderError::Native(format!(
                "expected {} transactions, got {}",
                transactions.len(),
                signed.length()
            )));
        }

        transactions
            .iter()
            .zip(signed.iter())
            .map(|(sent, signed)| signing::deserialize_signed(sent, &transaction_bytes(&signed)?))
            .collect()
    }
}

/// Wire bytes of a signed transaction: either raw bytes or an object with
/// `serialize()`.
fn transaction_bytes(value: &JsValue) -> Result<Vec<u8>, ProviderError> {
    if let Some(bytes) = value.dyn_ref::<js_sys::Uint8Array>() {
        return Ok(bytes.to_vec());
    }

    let serialize = function(value, "serialize").ok_or_else(|| {
        ProviderError::Native("signed transaction is neither bytes nor serializable".into())
    })?;
    let bytes = serialize.call0(value).map_err(js_error)?;
    Ok(js_sys::Uint8Array::new(&bytes).to_vec())
}

#[async_trait::async_trait(?Send)]
impl InjectedProvider for JsInjectedProvider {
    fn flag(&self, name: &str) -> bool {
        property(&self.object, name).is_some_and(|value| value.is_truthy())
    }

    fn public_key(&self) -> Option<Pubkey> {
        property(&self.object, "publicKey").and_then(|value| pubkey_from_js(&value))
    }

    fn is_connected(&self) -> bool {
        ["isConnected", "connected"]
            .iter()
            .any(|key| property(&self.object, key).is_some_and(|value| value.is_truthy()))
    }

    fn auto_approve(&self) -> bool {
        property(&self.object, "autoApprove").is_some_and(|value| value.is_truthy())
    }

    async fn connect(&self, options: ConnectOptions) -> Result<(), ProviderError> {
        let args = match options.network {
            Some(network) => {
                let options = js_sys::Object::new();
                js_sys::Reflect::set(
                    &options,
                    &JsValue::from_str("network"),
                    &JsValue::from_str(network.endpoint()),
                )
                .map_err(js_error)?;
                vec![options.into()]
            }
            None => vec![],
        };

        self.call("connect", &args).await?;
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), ProviderError> {
        self.call("disconnect", &[]).await?;
        Ok(())
    }

    async fn sign_message(&self, message: &[u8]) -> Result<SignedMessage, ProviderError> {
        let bytes = js_sys::Uint8Array::from(message);
        let result = self
            .call("signMessage", &[bytes.into(), JsValue::from_str("utf8")])
            .await?;

        if let Some(raw) = result.dyn_ref::<js_sys::Uint8Array>() {
            return Ok(SignedMessage::Raw(raw.to_vec()));
        }

        let signature = property(&result, "signature")
            .ok_or_else(|| ProviderError::Native("signMessage returned no signature".into()))?;

        Ok(SignedMessage::Structured {
            signature: js_sys::Uint8Array::new(&signature).to_vec(),
            public_key: property(&result, "publicKey").and_then(|value| pubkey_from_js(&value)),
        })
    }

    async fn sign_transaction(
        &self,
        transaction: Transaction,
    ) -> Result<Transaction, ProviderError> {
        if self.route("signTransaction")? == SigningApi::Native {
            return self.sign_natively(transaction).await;
        }

        let response: SignTransactionResponse = self
            .request(&signing::sign_transaction_request(&transaction))
            .await?;

        signing::apply_signature(transaction, &response)
    }

    async fn sign_all_transactions(
        &self,
        transactions: Vec<Transaction>,
    ) -> Result<Vec<Transaction>, ProviderError> {
        if self.route("signAllTransactions")? == SigningApi::Native {
            return self.sign_all_natively(transactions).await;
        }

        let response: SignAllTransactionsResponse = self
            .request(&signing::sign_all_transactions_request(&transactions))
            .await?;

        signing::apply_signatures(transactions, &response)
    }

    fn prefer_signing_api(&self, api: SigningApi) {
        match self.signing_api.lock() {
            Ok(mut preferred) => *preferred = api,
            Err(err) => tracing::warn!("{}: signing api not recorded: {err}", self.namespace),
        }
    }

    fn on(
        &self,
        event: ProviderEventKind,
        listener: ProviderListener,
    ) -> Result<(), ProviderError> {
        let on = self.method("on")?;

        let closure = Closure::wrap(Box::new(move |first: JsValue, second: JsValue| {
            let args: Vec<_> = [first, second]
                .iter()
                .filter(|arg| !arg.is_undefined())
                .map(js_to_json)
                .collect();
            listener(&args);
        }) as Box<dyn FnMut(JsValue, JsValue)>);

        on.call2(
            &self.object,
            &JsValue::from_str(<&'static str>::from(event)),
            closure.as_ref().unchecked_ref(),
        )
        .map_err(js_error)?;

        self.closures
            .lock()
            .map_err(|err| ProviderError::Native(err.to_string()))?
            .push(closure);

        Ok(())
    }

    fn listener_count(&self, event: ProviderEventKind) -> Result<usize, ProviderError> {
        let event_name = JsValue::from_str(<&'static str>::from(event));

        if let Some(listeners) = function(&self.object, "listeners") {
            let listeners = listeners.call1(&self.object, &event_name).map_err(js_error)?;
            return Ok(js_sys::Array::from(&listeners).length() as usize);
        }

        if let Some(listener_count) = function(&self.object, "listenerCount") {
            let count = listener_count.call1(&self.object, &event_name).map_err(js_error)?;
            return Ok(count.as_f64().unwrap_or_default() as usize);
        }

        Err(ProviderError::MethodMissing("listeners"))
    }
}
