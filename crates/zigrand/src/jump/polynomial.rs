//! GF(2) jump polynomials encoded as hexadecimal digit strings.

/// Jump polynomial for MELG19937-64 equivalent to 2^256 steps.
///
/// 4985 hexadecimal digits, most significant first: `ceil(19937 / 4)`
/// nibbles covering the degree-19937 characteristic polynomial.
pub const MELG19937_JUMP_2POW256: &str = "\
1510de5f1aeb1b349b7d2f3dc278bf1e6358d09c083c53b2b52b0b37aa42ec96ae92d919\
9e5ddb4f8f19419a1ae8d41d208cc209439db14c17bc032c1aa482b589174bb3ac3964a1\
28c742017ff511a9ddd720f397969f0c4dc862608725d5465dd0d25799d29ff579515657\
f3b7f58f5f6090d3c2c283b9e1cc517b48d4df4f03db955624557939ba23ff0b68b195a7\
a7413dcb302925711acc4fbc5554193ddcf43bfd9deeda0e3a684770ef6b11b8129f937e\
0c41e8c7c435bb76c6ca0518d6cd8809410c33a5f5f39573f7ed9479abe9a5ee7bf09e18\
9b1737f6fe53897026d792327de7e2c9ca050fa66f23eab9a0a83b67a9e6d54d70ce4666\
4dbc4af7cee88756fc50f16b841b76167c66613ef43b00b775aeed0e260fde67da03f605\
1ba11dbfa2070447f3aba151e001404a11d3049e53f177ee4c275cffcf4c6e5c7b8a1e8d\
b086731abb01ea50ec8440bc45fdd3c23679a68b29b2457d0013878d8a7f1dccc595f99e\
656b64da2715a392eb68a517989be24c663dcbfb663ff38c567fa6b5fe8bdccbd3016352\
4a9a1d63cf609eb93a1fe3cca5e1220bd05e4dcb611a459d6ee70bbf5786d6fb887aea96\
e70e78af7f50dcbc638664ac28efcab6356ded959bb79355c5bc5e189a20bb8f64e5fcb4\
44c2f29c57fce7a70208115da1b8a663c8062cbc98e353526b1d72371c07fb0cad50a923\
eef2c5c865d733be91978e1279cc45ea20f534e428422f72c30957e7fab79da909526d09\
7b4a3a790c2b3cae28ef52e5eb4302858110e1bcc31187bdbf79012e770ff95126a7a04b\
4059e2a9f9f885a6af3d5d067148e05bdd01bdc8f7a33b475631f89a08e92e61a2561884\
6b55a2f42ab42c56ce3d3948fdf515b90b344f726bfe8543a93367cd5d95b08d4da0bcc7\
b2fc65384a51eb16766ee2ee3bdf82b6cf24c7a81e826d2e9f81e81917ead9c3ca2b0ea0\
a2395cf4804080dd0cbf4698e412b7a249ddc89bc939e34857437be5fc1586f932a0a10c\
48121eb5e83a1d4e4bd682d9674d6d42f8ec190dada2ba9c4c0c25392b1cfc32916c9f7d\
d5978badc53796d2c2843880adfaff7d83b73c5959b9a7424715d2f7a47e1c0363c7d3f6\
0c332c8bb39b865608c1035c2773f53a0edc2582182a5cffaa5acd15820daeff1658c64a\
c4b579f8134fd1db297c1d4d4dd03b4f063a293a2cbda3aaf381e6cf54a0cd949e5ed247\
3852484566db89de18654d8efa020ed963c9d26dbba50a3de5f0c3b6e72b477c8f26284d\
cf561c3df5780cef6197039cc076391022a0d57845e992e3b52189c95e92172461838b14\
f014f452ab24460be82113d41f3147e210c03f8430b223836d1efe5ef96bf56708dbad03\
3d57fa74beb1314c1abf1b328b4145c359bc4b6befc94c6bec8762f5feaa4f14f309e5e5\
1415479d1f16821528b707599eb530a8986b751ccce0d17055894116cd032af55860af01\
6dff76fa14ceb606c4b277f5968f897d91b544db7cf0de9fb237d5990007517e0aab7a73\
866d498e76f772006d3bf2387c552ba3d72e3a6aa324edeea5989a45b0468ec514127156\
141de06e22c78347d6dc48c07dd42b1a9c543deed9006daa8ae676dc328f7dbc5d9002d2\
f481f9cc4c7b9a433377bf61d0d75eae143ff8c7e7e0f09a805ee12e187c02724a9c5e67\
89dd2a5300753bdfcc1c964c818d2a45e13e4ba89ea90fdd45b40a1b76079cbcbfc71716\
2eb27d7a902f213646ed65e7f00e5fbc0cd74bb099e00ed350b493225e88e5693d999244\
b8d0f1f9bbfad03e5223416fd790bcc6e047abd1523245c6a46d397f63b38ecebaf79234\
b53b9b02374cdf7bcaa9558043e1018eb14ec31b1fb56a7e6aa673010812cf5abc0ed2ec\
1df75a615632f59968a92de6cc183c4c15553fe5ca263cf3cffd1342e60975ac2de843f5\
b5a6314e382dd6a6887b87e29f9b31b0d7a2dc31e9f07212fa0c2e69db50d30bd676460a\
94a9822f5aaf5af01bc566136da7138ba69554577a2ef2f5d91051ec7ee3645a0df47bbe\
a49e2a47c1279e3510e08c89c9d5b20966125b582469b13d99308119423dab451f29b8b4\
f6ebeff94a06c74d9f6e040c269c39b1c5942cd96f812b35b047357ddb08863649a13cb3\
8a4e10d047b8aa84a81870de3cd774a4b6174291bc3731437aefa7dbbf2af9c497dec0a9\
0a3655395944fc6a0c3e46326a10d905fbd5cd90ccd46baac32cff4f6e48936de047e3eb\
24cf7e7e64ac7616ed8fe0ad751daee7bc8e09ab4447718355e92fbd583a3165466d722c\
4fb0f904d865b77b99053db2709ae3c721b714ae8bbdac87fc0b81a5c5ddc2e042e31558\
01276efc14e508e5fff27ad21ff1c97565737320b1344df216188bb3872a28c11ecc1aab\
ce8cdf9749b6bc6739628e3f35b531a32dac218196becb2945904b35079ce2bbd97f811f\
b71c2fa1d9cc5ea65a9d88ee77ab2a52e48e8aaf4e4d91679618ffe441b8c319bf6c6589\
e118f3abd0f8c22fc930af64e1b0e4616c1f5f94c50ea240ea8cdd7d57f9b7ee11c3516f\
16115bc995e586f3483ca5be4bbf1c1fe4578934f77c03e307f6096854e9a93d28cd7331\
ce91371a2f50ae608d1f0348f8ce3ce48eaaf83f7195ea7b3fbcf4b331d4a2c7f21843b7\
45164e4b71678b8ea41580feef7db43f090915ec7edae77eb058d37fa04571f4bad32d08\
d364301a7f0fc633fdfe3f9695f0edf8de2187dee171988c47da64da030fcbcfd8fc3b77\
a59943d46927c869e6065b237a0d9e32a72cf0e15ae969b0672a5f5835cdba88ce9173ab\
e094d95ae7acee85e176fb826b9ffe01ca860f9506540e6f415a9c5ba8ad9a8dd306188f\
c1973dcd33f75c4b58f5d6a6df6a5ed88f4514690dee844b77c5fc6bb2090d5b6364fc31\
b0ec50e29cca44752024bc3270f553570ac196066eb1f04e09be04b7301a915080ebeaea\
4c749c04f2d4cf79c5805d08beb34b966fbc5e153f80a00101883c93861bbee60c524700\
53546aeb57e487092b60884ab20f738f87c9ab6bca2a3370ffaf745ccbc44bae13befd29\
deacddb38d0124e02ef8aa656a87f747e0deac35e7fe2f191ed119a6908a909222deffb0\
28e5e12fea7c3be122fb684ebf83f8adcba142affa7753e27370b493fed258a4db506804\
2a9e4db38d160f388f4064dfd13b3bbfe95bcd6176ce99fef56573fc8141bc4a290202b2\
437df2886f2dcfb693d3110b78220a7007b695bfda744a356cbce15814d2eaf71e322e95\
42d4933c7051e83f5a1636c72bda12822d803ca4daa66e5baa793271a6b301d1ec7a818a\
4b5ddca7d1141d830883cd1586b50b0cdee0f4d445752b2716b5cc44d8b2e1149b4ec4ca\
06f87fa7be9b4aad509804b64f3edebba10fc687f20d238a39f3b219c2e8f8f6f3533671\
843a521a457df1dbccc54b624ba0609fed10acfb9b3442bbf93f5689415d4243a06f5395\
8e06f28b7b4e5d08ea178bc92eee27adb94f002b7d0bbc0da400752421ab4edcce592d99\
96d2472b967043d20";

/// A jump polynomial over GF(2) in hexadecimal form.
///
/// Applying the polynomial to a linear generator means walking its bits
/// from the most significant down: for every set bit the current state is
/// XOR-accumulated, and after every bit the generator steps once. The
/// accumulator then becomes the new state.
///
/// # Examples
///
/// ```rust
/// use zigrand::jump::JumpPolynomial;
///
/// let poly = JumpPolynomial::new("a1");
/// let bits: Vec<bool> = poly.bits().collect();
/// assert_eq!(bits, [true, false, true, false, false, false, false, true]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JumpPolynomial {
    digits: &'static str,
}

impl JumpPolynomial {
    /// The MELG19937-64 jump by 2^256 steps.
    pub const MELG19937: Self = Self::new(MELG19937_JUMP_2POW256);

    /// Wraps a string of hexadecimal digits.
    ///
    /// Characters outside `[0-9a-fA-F]` contribute four clear bits.
    pub const fn new(digits: &'static str) -> Self {
        Self { digits }
    }

    /// Number of bits walked, four per digit.
    pub fn bit_len(&self) -> usize {
        self.digits.len() * 4
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> u32 {
        self.nibbles().map(u8::count_ones).sum()
    }

    /// Iterates over the bits, most significant first.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.nibbles()
            .flat_map(|nibble| (0..4).rev().map(move |shift| (nibble >> shift) & 1 == 1))
    }

    fn nibbles(&self) -> impl Iterator<Item = u8> + '_ {
        self.digits
            .chars()
            .map(|c| c.to_digit(16).map_or(0, |d| d as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_melg_polynomial_shape() {
        assert_eq!(MELG19937_JUMP_2POW256.len(), 4985);
        assert!(MELG19937_JUMP_2POW256
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(JumpPolynomial::MELG19937.bit_len(), 19940);
        assert!(MELG19937_JUMP_2POW256.starts_with("1510de5f1aeb1b34"));
    }

    #[test]
    fn test_bits_are_msb_first() {
        let poly = JumpPolynomial::new("8001");
        let bits: Vec<bool> = poly.bits().collect();
        assert_eq!(bits.len(), 16);
        assert!(bits[0]);
        assert!(bits[15]);
        assert_eq!(bits.iter().filter(|b| **b).count(), 2);
        assert_eq!(poly.count_ones(), 2);
    }

    #[test]
    fn test_non_hex_digits_are_clear() {
        let poly = JumpPolynomial::new("zF");
        let bits: Vec<bool> = poly.bits().collect();
        assert_eq!(bits, [false, false, false, false, true, true, true, true]);
    }
}
