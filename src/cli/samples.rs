//! Example messages for quick manual checks.
//!
//! They go through the same `classify` entry point as any other text.

/// PayLater-themed example SMS, scam and legitimate mixed.
pub const SAMPLE_MESSAGES: [&str; 10] = [
    "Tagihan PayLater Anda belum dibayar. Denda akan dikenakan hari ini.",
    "Akun PayLater Anda diblokir sementara. Segera lakukan verifikasi.",
    "Kesempatan terakhir! Bayar tagihan PayLater sekarang.",
    "Promo PayLater 0% bunga khusus hari ini.",
    "Pembayaran PayLater Anda berhasil. Terima kasih.",
    "Ingatkan teman Anda untuk menggunakan PayLater dan dapatkan bonus!",
    "Tagihan PayLater Anda sudah lunas. Nikmati kemudahan berbelanja lagi.",
    "Verifikasi identitas Anda untuk keamanan akun PayLater.",
    "Dapatkan cashback hingga 50% dengan menggunakan PayLater di merchant pilihan.",
    "Perbarui informasi pembayaran PayLater Anda untuk menghindari gangguan layanan.",
];

/// Look up an example by its 1-based number.
pub fn sample(number: usize) -> Option<&'static str> {
    number
        .checked_sub(1)
        .and_then(|index| SAMPLE_MESSAGES.get(index))
        .copied()
}
